use pretty_assertions::assert_eq;
use tabula_core::{
    driver::Flavor,
    stmt::{access, literal, not, sym, Expr},
};

#[test]
fn symbol() {
    assert_eq!(sym("abc").to_string(), "abc");
}

#[test]
fn literals() {
    assert_eq!(literal(&true).to_string(), "1");
    assert_eq!(literal("abc").to_string(), "\"abc\"");
    assert_eq!(literal(&1.5).to_string(), "1.500000");
    assert_eq!(literal(&5).to_string(), "5");
    assert_eq!(literal(&None::<i32>).to_string(), "NULL");
}

#[test]
fn infix_operators() {
    assert_eq!((sym("a") + sym("b")).to_string(), "(a + b)");
    assert_eq!((sym("a") - 1).to_string(), "(a - 1)");
    assert_eq!((sym("a") * 2).to_string(), "(a * 2)");
    assert_eq!((sym("a") / 2).to_string(), "(a / 2)");
    assert_eq!(Expr::lt(sym("a"), 1).to_string(), "(a < 1)");
    assert_eq!(Expr::le(sym("a"), 1).to_string(), "(a <= 1)");
    assert_eq!(Expr::eq(sym("a"), 1).to_string(), "(a = 1)");
    assert_eq!(Expr::ne(sym("a"), 1).to_string(), "(a <> 1)");
    assert_eq!(Expr::ge(sym("a"), 1).to_string(), "(a >= 1)");
    assert_eq!(Expr::gt(sym("a"), 1).to_string(), "(a > 1)");
    assert_eq!((sym("a") & sym("b")).to_string(), "(a AND b)");
    assert_eq!((sym("a") | sym("b")).to_string(), "(a OR b)");
}

#[test]
fn native_left_operand_becomes_literal() {
    assert_eq!(("hello\nworld" + sym("b")).to_string(), r#"("hello\nworld" + b)"#);
    assert_eq!((123i32 + sym("b")).to_string(), "(123 + b)");
    assert_eq!(Expr::eq(5, sym("x")).to_string(), "(5 = x)");
    assert_eq!((true & sym("b")).to_string(), "(1 AND b)");
}

#[test]
fn negation() {
    assert_eq!(not(sym("a")).to_string(), "(NOT a)");
    assert_eq!((!Expr::gt(sym("x"), 5)).to_string(), "(NOT (x > 5))");
}

#[test]
fn member_access() {
    assert_eq!(access(sym("t1"), "x").to_string(), "t1.x");
    assert_eq!(access(sym(""), "x").to_string(), "x");
    assert_eq!(access(access(sym("db"), "t1"), "x").to_string(), "db.t1.x");
}

#[test]
fn shared_subexpressions() {
    let x = Expr::gt(sym("x"), 5);
    let both = Expr::and(&x, Expr::or(&x, sym("y")));
    assert_eq!(both.to_string(), "((x > 5) AND ((x > 5) OR y))");
    assert_eq!(x.to_string(), "(x > 5)");
}

#[test]
fn literals_follow_dialect() {
    let filter = Expr::eq(sym("title"), "it's\n");
    let mut sqlite = String::new();
    filter.append_sql(Flavor::Sqlite, &mut sqlite);
    assert_eq!(sqlite, "(title = ('it''s'||char(10)))");

    let mut mysql = String::new();
    filter.append_sql(Flavor::Mysql, &mut mysql);
    assert_eq!(mysql, r#"(title = "it\'s\n")"#);
}
