use super::Serializer;

use tabula_core::driver::Capability;

impl Serializer {
    pub fn new(capability: &'static Capability) -> Serializer {
        Serializer { capability }
    }

    pub fn sqlite() -> Serializer {
        Serializer::new(&Capability::SQLITE)
    }

    pub fn mysql() -> Serializer {
        Serializer::new(&Capability::MYSQL)
    }
}
