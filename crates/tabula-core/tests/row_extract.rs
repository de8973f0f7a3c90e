use tabula_core::{driver::Flavor, field, DataType, Field, RawColumn, Row};

#[derive(Debug, Default, PartialEq)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(Debug, Default, PartialEq)]
struct Entry {
    a: i32,
    b: Point,
}

fn point_row() -> Row<Point> {
    Row::new()
        .add_field("x", field!(Point, x))
        .add_field("y", field!(Point, y))
}

#[test]
fn single_column_row() {
    let row = Row::<i32>::new().add_scalar_column("x");
    assert_eq!(row.len(), 1);
    assert_eq!(row.columns()[0].name, "x");
    assert_eq!(row.columns()[0].ty, DataType::integer(true, 4));

    let mut value = 0;
    row.extract(&["-12".into()], &mut value).unwrap();
    assert_eq!(value, -12);
}

#[test]
fn extending_row() {
    let r2 = Row::<Entry>::new()
        .add_field("a", field!(Entry, a))
        .extend(&point_row(), field!(Entry, b));

    let names: Vec<_> = r2.columns().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["a", "x", "y"]);

    let mut value = Entry::default();
    r2.extract(&["123".into(), "456".into(), "789".into()], &mut value)
        .unwrap();

    assert_eq!(value.a, 123);
    assert_eq!(value.b.x, 456);
    assert_eq!(value.b.y, 789);
}

#[test]
fn extended_columns_serialize_through_parent() {
    let row = Row::<Entry>::new()
        .extend(&point_row(), field!(Entry, b))
        .add_field("a", field!(Entry, a));

    let entry = Entry {
        a: 1,
        b: Point { x: 2, y: 3 },
    };

    let mut dst = String::new();
    for i in 0..row.len() {
        if i > 0 {
            dst.push(',');
        }
        row.append_value(&entry, i, Flavor::Sqlite, &mut dst);
    }

    assert_eq!(dst, "2,3,1");
}

#[test]
fn combined_accessor_column() {
    let x: Field<Point, i32> = Field::new(|row: &Point| &row.x, |row: &mut Point| &mut row.x);
    let row = Row::<Point>::new().add_field("x", x);

    let mut point = Point::default();
    row.extract(&["5".into()], &mut point).unwrap();
    assert_eq!(point, Point { x: 5, y: 0 });
}

#[test]
fn getter_setter_column() {
    #[derive(Default)]
    struct Account {
        cents: i64,
    }

    // Stored as a decimal string column holding whole dollars.
    let row = Row::<Account>::new().add_column(
        "dollars",
        |account: &Account| account.cents / 100,
        |account: &mut Account, dollars: i64| account.cents = dollars * 100,
    );

    let mut account = Account::default();
    row.extract(&["42".into()], &mut account).unwrap();
    assert_eq!(account.cents, 4200);

    let mut dst = String::new();
    row.append_value(&account, 0, Flavor::Mysql, &mut dst);
    assert_eq!(dst, "42");
}

#[test]
fn extraction_follows_column_order_not_field_order() {
    let row = Row::<Point>::new()
        .add_field("y", field!(Point, y))
        .add_field("x", field!(Point, x));

    let mut point = Point::default();
    row.extract(&["1".into(), "2".into()], &mut point).unwrap();
    assert_eq!(point, Point { x: 2, y: 1 });
}

#[test]
fn typed_column_overrides_inferred_type() {
    #[derive(Default)]
    struct Doc {
        title: String,
    }

    let row = Row::<Doc>::new().add_typed_field("title", DataType::varchar_with(80), field!(Doc, title));
    assert_eq!(row.columns()[0].ty, DataType::varchar_with(80));
}

#[test]
fn null_cell_into_required_field_fails() {
    let mut point = Point::default();
    let err = point_row()
        .extract(&[RawColumn::NULL, "1".into()], &mut point)
        .unwrap_err();

    assert!(err.is_unexpected_null());
}

#[test]
fn nested_field_path() {
    let bx = field!(Entry, b.x);
    let row = Row::<Entry>::new().add_field("bx", bx);

    let mut entry = Entry::default();
    row.extract(&["9".into()], &mut entry).unwrap();
    assert_eq!(entry.b.x, 9);

    let chained = field!(Entry, b).then(&field!(Point, y));
    *chained.get_mut(&mut entry) = 4;
    assert_eq!(entry.b.y, 4);
}
