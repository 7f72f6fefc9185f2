use samara_flags::*;

fn perms() -> (FlagValue, FlagValue, FlagValue, FlagValue) {
    let perms = define_flag_set([("READ", 1), ("WRITE", 2), ("EXECUTE", 4), ("DELETE", 8)]).unwrap();
    (perms["READ"], perms["WRITE"], perms["EXECUTE"], perms["DELETE"])
}

#[test]
fn test_has() {
    let (read, write, execute, _) = perms();
    let flags = flag_value(read | write);

    assert!(flags.has(&[read]));
    assert!(flags.has(&[read, write]));
    assert!(!flags.has(&[execute]));
    assert!(!flags.has(&[read, execute]));
    assert_eq!(flags.value(), 3);
}

#[test]
fn test_empty_arguments() {
    let zero = Flags::default();
    let some = flag_value(5u32);

    assert!(!zero.has(&[]));
    assert!(!some.has(&[]));
    assert!(!zero.has_any(&[]));
    assert!(!some.has_any(&[]));
    assert!(zero.has_exact(&[]));
    assert!(!some.has_exact(&[]));

    assert_eq!(some.add(&[]).get(), 5);
    assert_eq!(some.remove(&[]).get(), 5);
    assert_eq!(some.toggle(&[]).get(), 5);
}

#[test]
fn test_has_any_and_exact() {
    let (read, write, execute, delete) = perms();
    let flags = flag_value(read | execute);

    assert!(flags.has_any(&[read, write]));
    assert!(flags.has_any(&[delete, execute]));
    assert!(!flags.has_any(&[write, delete]));

    assert!(flags.has_exact(&[read, execute]));
    assert!(flags.has_exact(&[execute, read]));
    assert!(!flags.has_exact(&[read]));
    assert!(!flags.has_exact(&[read, write, execute]));
}

#[test]
fn test_add() {
    let (read, write, execute, delete) = perms();
    let flags = flag_value(read);

    let added = flag_value(flags.add(&[write, execute]));
    assert!(added.has(&[read, write, execute]));
    assert!(!added.has(&[delete]));

    assert_eq!(added.add(&[write]), added.flag_value());
    assert_eq!(flags.value(), 1);
}

#[test]
fn test_remove() {
    let (read, write, execute, delete) = perms();
    let flags = flag_value(read | write | execute);

    let removed = flag_value(flags.remove(&[write]));
    assert!(removed.has(&[read, execute]));
    assert!(!removed.has(&[write]));

    assert_eq!(removed.remove(&[delete]), removed.flag_value());
    assert_eq!(flags.remove(&[read, write, execute]), FlagValue::EMPTY);
}

#[test]
fn test_toggle() {
    let (read, write, _, _) = perms();
    let flags = flag_value(read);

    let toggled = flags.toggle(&[read, write]);
    assert_eq!(toggled, write);
    assert_eq!(flag_value(toggled).toggle(&[read, write]), read);
}

#[test]
fn test_clear() {
    assert_eq!(flag_value(FlagValue::MAX).clear(), FlagValue::EMPTY);
    assert_eq!(Flags::default().clear(), FlagValue::EMPTY);
}

#[test]
fn test_handle_is_never_mutated() {
    let (read, write, execute, _) = perms();
    let flags = flag_value(read | write);

    let _ = flags.add(&[execute]);
    let _ = flags.remove(&[read]);
    let _ = flags.toggle(&[write]);
    let _ = flags.clear();

    assert_eq!(flags.value(), 3);
    assert_eq!(flags.value_of(), 3);
    assert_eq!(flags.to_string(), "3");
}

#[test]
fn test_value_coercions() {
    let flags = flag_value(42u32);
    assert_eq!(flags, 42u32);
    assert_eq!(u32::from(flags), 42);
    assert_eq!(FlagValue::from(flags).get(), 42);
    assert_eq!(flags, FlagValue::new(42).unwrap());
    assert_eq!(Flags::new(FlagValue::new(42).unwrap()), flags);
    assert_eq!(flags.to_string(), "42");
}

#[test]
fn test_raw_integers_are_not_validated() {
    let flags = flag_value(-1i32);
    assert_eq!(flags.value(), u32::MAX);
    assert!(flags.has(&[FlagValue::MAX]));
}

#[test]
fn test_default_is_zero() {
    let flags = Flags::default();
    assert_eq!(flags.value(), 0);
    assert_eq!(flags.to_string(), "0");
}
