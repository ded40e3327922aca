use zopt_z3::{Ast, Context, ContextConfig, Optimize, SatResult, Symbol};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

fn context() -> Context {
    Context::new(&ContextConfig::new().with_model(true)).expect("failed to create context")
}

#[test]
fn test_bounded_integer_is_sat() {
    init_tracing();
    let ctx = context();
    let mut opt = Optimize::new(&ctx).expect("failed to create optimize");

    // 0 < x < 10
    let x = Ast::int_const(&ctx, "x").expect("x");
    let zero = Ast::int(&ctx, 0).expect("0");
    let ten = Ast::int(&ctx, 10).expect("10");
    opt.assert(&x.gt(&zero).expect("x > 0"));
    opt.assert(&x.lt(&ten).expect("x < 10"));

    assert_eq!(opt.check(), SatResult::Sat);

    let model = opt.model().expect("missing model");
    let value = model
        .eval(&x, true)
        .and_then(|v| v.as_i64())
        .expect("x must evaluate to an integer");
    assert!(0 < value && value < 10, "Expected x in (0, 10), got {value}");

    opt.close();
}

#[test]
fn test_contradiction_is_unsat() {
    init_tracing();
    let ctx = context();
    let mut opt = Optimize::new(&ctx).expect("failed to create optimize");

    let x = Ast::int_const(&ctx, "x").expect("x");
    let zero = Ast::int(&ctx, 0).expect("0");
    opt.assert(&x.gt(&zero).expect("x > 0"));
    opt.assert(&x.lt(&zero).expect("x < 0"));

    assert_eq!(opt.check(), SatResult::Unsat);
}

#[test]
fn test_soft_constraint_is_honoured() {
    init_tracing();
    let ctx = context();
    let mut opt = Optimize::new(&ctx).expect("failed to create optimize");

    let x = Ast::int_const(&ctx, "x").expect("x");
    let zero = Ast::int(&ctx, 0).expect("0");
    let five = Ast::int(&ctx, 5).expect("5");
    let group = Symbol::named(&ctx, "g").expect("g");

    opt.assert(&x.gt(&zero).expect("x > 0"));
    opt.assert_soft(&x.lt(&five).expect("x < 5"), "1", group)
        .expect("failed to add soft constraint");

    assert_eq!(opt.check(), SatResult::Sat);

    let model = opt.model().expect("missing model");
    let value = model
        .eval(&x, true)
        .and_then(|v| v.as_i64())
        .expect("x must evaluate to an integer");
    assert!(value > 0, "hard constraint violated: x = {value}");
    assert!(value < 5, "achievable soft constraint violated: x = {value}");
}

#[test]
fn test_infeasible_soft_constraint_is_dropped() {
    init_tracing();
    let ctx = context();
    let mut opt = Optimize::new(&ctx).expect("failed to create optimize");

    let x = Ast::int_const(&ctx, "x").expect("x");
    let ten = Ast::int(&ctx, 10).expect("10");
    let five = Ast::int(&ctx, 5).expect("5");
    let group = Symbol::numbered(&ctx, 1).expect("group");

    opt.assert(&x.gt(&ten).expect("x > 10"));
    opt.assert_soft(&x.lt(&five).expect("x < 5"), "3", group)
        .expect("failed to add soft constraint");

    assert_eq!(opt.check(), SatResult::Sat);
    let model = opt.model().expect("missing model");
    let value = model.eval(&x, true).and_then(|v| v.as_i64()).expect("x");
    assert!(value > 10, "hard constraint violated: x = {value}");
}

#[test]
fn test_heavier_soft_constraint_wins() {
    init_tracing();
    let ctx = context();
    let mut opt = Optimize::new(&ctx).expect("failed to create optimize");

    let p = Ast::bool_const(&ctx, "p").expect("p");
    let not_p = p.not().expect("not p");
    let group = Symbol::named(&ctx, "g").expect("g");

    opt.assert_soft(&p, "1", group).expect("soft p");
    opt.assert_soft(&not_p, "2.5", group).expect("soft not p");

    assert_eq!(opt.check(), SatResult::Sat);
    let model = opt.model().expect("missing model");
    let value = model.eval(&p, true).expect("p");
    assert_eq!(value.to_string(), "false");
}
