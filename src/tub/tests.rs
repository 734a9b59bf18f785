use super::*;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

#[test]
fn test_new_is_absent() {
    let tub: Tub<String> = Tub::new();
    assert!(!tub.is_present());
    assert!(tub.get().is_none());
    assert!(!bool::from(&tub));
}

#[test]
fn test_default_is_absent() {
    let tub: Tub<u8> = Tub::default();
    assert!(!tub.is_present());
}

#[test]
fn test_construct_returns_storage() {
    let mut tub: Tub<u32> = Tub::new();
    let ptr: *mut u32 = tub.construct(9);
    assert_eq!(ptr, tub.as_mut_ptr());
    assert_eq!(*tub, 9);
}

#[test]
fn test_get_or_construct_with_only_constructs_once() {
    let mut tub: Tub<i32> = Tub::new();
    let mut calls = 0;
    *tub.get_or_construct_with(|| {
        calls += 1;
        10
    }) += 1;
    tub.get_or_construct_with(|| {
        calls += 1;
        99
    });
    assert_eq!(calls, 1);
    assert_eq!(*tub, 11);
}

#[test]
fn test_take_and_replace() {
    let mut tub = Tub::from(String::from("a"));
    assert_eq!(tub.replace(String::from("b")).as_deref(), Some("a"));
    assert_eq!(tub.take().as_deref(), Some("b"));
    assert!(!tub.is_present());
    assert_eq!(tub.replace(String::from("c")), None);
    assert_eq!(tub.into_inner().as_deref(), Some("c"));
}

#[test]
fn test_destroy_drops_once() {
    let tracker = Rc::new(());
    let mut tub = Tub::from(Rc::clone(&tracker));
    assert_eq!(Rc::strong_count(&tracker), 2);

    tub.destroy();
    assert!(!tub.is_present());
    assert_eq!(Rc::strong_count(&tracker), 1);

    tub.destroy();
    drop(tub);
    assert_eq!(Rc::strong_count(&tracker), 1);
}

#[test]
fn test_option_conversions() {
    let tub: Tub<i32> = Some(4).into();
    assert_eq!(tub.get(), Some(&4));
    let back: Option<i32> = Option::from(tub);
    assert_eq!(back, Some(4));

    let tub: Tub<i32> = None.into();
    assert!(!tub.is_present());
}

#[test]
fn test_debug_and_eq() {
    let mut a: Tub<i32> = Tub::new();
    assert_eq!(format!("{a:?}"), "Tub(<absent>)");
    a.construct(3);
    assert_eq!(format!("{a:?}"), "Tub(3)");

    assert_eq!(a, Tub::from(3));
    assert_ne!(a, Tub::from(4));
    assert_ne!(a, Tub::new());
    assert_eq!(Tub::<i32>::new(), Tub::new());
}

#[test]
fn test_clone_from_absent_source_destroys() {
    let tracker = Rc::new(());
    let mut dest = Tub::from(Rc::clone(&tracker));
    dest.clone_from(&Tub::new());
    assert!(!dest.is_present());
    assert_eq!(Rc::strong_count(&tracker), 1);
}

#[test]
#[should_panic(expected = "dereferenced an absent Tub")]
fn test_deref_absent_panics() {
    let tub: Tub<i32> = Tub::new();
    let _value = *tub;
}

#[test]
fn test_panicking_drop_is_not_repeated() {
    struct Bomb {
        _tracker: Rc<()>,
    }
    impl Drop for Bomb {
        fn drop(&mut self) {
            panic!("drop failed");
        }
    }

    let tracker = Rc::new(());
    let mut tub = Tub::from(Bomb {
        _tracker: Rc::clone(&tracker),
    });
    let result = panic::catch_unwind(AssertUnwindSafe(|| tub.destroy()));
    assert!(result.is_err());
    assert!(!tub.is_present());
    // The field was still dropped during unwinding.
    assert_eq!(Rc::strong_count(&tracker), 1);
    drop(tub);
}
