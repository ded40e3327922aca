use zopt_z3::{Ast, Context, ContextConfig, Optimize, SatResult, Symbol};

fn context() -> Context {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
    Context::new(&ContextConfig::new().with_model(true)).expect("failed to create context")
}

#[test]
fn test_create_then_release_without_assertions() {
    let ctx = context();
    for _ in 0..10 {
        let opt = Optimize::new(&ctx).expect("failed to create optimize");
        opt.close();
    }
    assert!(ctx.last_error().is_none());
}

#[test]
fn test_check_is_always_tri_state() {
    let ctx = context();
    let x = Ast::int_const(&ctx, "x").expect("x");
    let bounds: Vec<(i64, i64)> = vec![(0, 10), (5, 5), (3, -3), (-100, 100)];

    for (lower, upper) in bounds {
        let mut opt = Optimize::new(&ctx).expect("failed to create optimize");
        opt.assert(&x.ge(&Ast::int(&ctx, lower).expect("lower")).expect("x >= lower"));
        let upper = Ast::int(&ctx, upper).expect("upper");
        let group = Symbol::named(&ctx, "bound").expect("group");
        opt.assert_soft(&x.le(&upper).expect("x <= upper"), "2", group)
            .expect("soft bound");
        let result = opt.check();
        assert!(
            matches!(
                result,
                SatResult::Sat | SatResult::Unsat | SatResult::Unknown
            ),
            "unexpected result {result:?}"
        );
    }
}

#[test]
fn test_each_model_call_owns_a_reference() {
    let ctx = context();
    let mut opt = Optimize::new(&ctx).expect("failed to create optimize");
    let x = Ast::int_const(&ctx, "x").expect("x");
    let seven = Ast::int(&ctx, 7).expect("7");
    opt.assert(&x.eq(&seven).expect("x == 7"));
    assert_eq!(opt.check(), SatResult::Sat);

    let first = opt.model().expect("first model");
    let second = opt.model().expect("second model");
    drop(first);

    // The second reference must survive both the first one and the optimizer.
    opt.close();
    let value = second.eval(&x, true).and_then(|v| v.as_i64());
    assert_eq!(value, Some(7));
    assert_eq!(second.num_consts(), 1);
    assert!(second.to_string().contains("x"));
}

#[test]
fn test_model_tracks_latest_check() {
    let ctx = context();
    let mut opt = Optimize::new(&ctx).expect("failed to create optimize");
    let x = Ast::int_const(&ctx, "x").expect("x");

    opt.assert(&x.eq(&Ast::int(&ctx, 1).expect("1")).expect("x == 1"));
    assert_eq!(opt.check(), SatResult::Sat);
    let before = opt.model().expect("model");

    opt.push();
    opt.assert(&x.gt(&Ast::int(&ctx, 1).expect("1")).expect("x > 1"));
    assert_eq!(opt.check(), SatResult::Unsat);
    opt.pop();

    assert_eq!(opt.check(), SatResult::Sat);
    let after = opt.model().expect("model");
    assert_eq!(before.eval(&x, true).and_then(|v| v.as_i64()), Some(1));
    assert_eq!(after.eval(&x, true).and_then(|v| v.as_i64()), Some(1));
}

#[test]
fn test_objectives() {
    let ctx = context();
    let x = Ast::int_const(&ctx, "x").expect("x");
    let lower = x.ge(&Ast::int(&ctx, -4).expect("-4")).expect("x >= -4");
    let upper = x.le(&Ast::int(&ctx, 9).expect("9")).expect("x <= 9");

    let mut opt = Optimize::new(&ctx).expect("failed to create optimize");
    opt.assert(&lower);
    opt.assert(&upper);
    assert_eq!(opt.maximize(&x), 0);
    assert_eq!(opt.check(), SatResult::Sat);
    let model = opt.model().expect("model");
    assert_eq!(model.eval(&x, true).and_then(|v| v.as_i64()), Some(9));
    opt.close();

    let mut opt = Optimize::new(&ctx).expect("failed to create optimize");
    opt.assert(&Ast::and(&ctx, &[&lower, &upper]).expect("bounds"));
    opt.minimize(&x);
    assert_eq!(opt.check(), SatResult::Sat);
    let model = opt.model().expect("model");
    assert_eq!(model.eval(&x, true).and_then(|v| v.as_i64()), Some(-4));
}

#[test]
fn test_engine_error_is_recorded() {
    let ctx = context();
    let x = Ast::int_const(&ctx, "x").expect("x");
    let p = Ast::bool_const(&ctx, "p").expect("p");

    assert!(x.lt(&p).is_err());
    let err = ctx.last_error().expect("sort error must be recorded");
    assert_eq!(err.code(), "ENGINE_ERROR");

    // The context stays usable after a recorded error.
    let mut opt = Optimize::new(&ctx).expect("failed to create optimize");
    opt.assert(&p);
    assert_eq!(opt.check(), SatResult::Sat);
}
