use alloc::format;
use alloc::string::String;
use alloc::string::ToString;
use alloc::vec;
use alloc::vec::Vec;
use core::cell::Cell;
use core::ops::ControlFlow;

use crate::*;

fn one_two_three() -> Resumable<&'static str, core::array::IntoIter<i32, 3>> {
    Resumable::new(|_| [1, 2, 3])
}

#[test]
fn alive_after_construction() {
    assert!(one_two_three().is_alive());
}

#[test]
fn factory_runs_but_producer_does_not() {
    let factory_calls = Cell::new(0);
    let steps = Cell::new(0);
    let (factory_calls, steps) = (&factory_calls, &steps);
    let mut r = Resumable::new(move |_: InputCell<()>| {
        factory_calls.set(factory_calls.get() + 1);
        core::iter::from_fn(move || {
            steps.set(steps.get() + 1);
            Some(())
        })
    });
    assert_eq!((factory_calls.get(), steps.get()), (1, 0));
    assert!(r.current().is_none());
    r.assert_yields((), ());
    assert_eq!((factory_calls.get(), steps.get()), (1, 1));
}

#[test]
fn lazy_tail_returns_last_value_again() {
    one_two_three()
        .assert_yields("a", 1)
        .assert_yields("b", 2)
        .assert_yields("c", 3)
        .assert_finishes("d", 3)
        .assert_completed("e")
        .assert_completed("f");
}

#[test]
fn empty_producer_finishes_with_default() {
    let mut r = Resumable::new(|_: InputCell<i32>| core::iter::empty::<u8>());
    assert_eq!(r.resume(7), Ok(0));
    assert!(!r.is_alive());
    assert_eq!(r.current(), None);
    assert_eq!(r.resume(7), Err(ResumeError::Completed));
}

#[test]
fn completed_resume_does_not_write_input() {
    let mut r = Resumable::new(|input: InputCell<i32>| {
        let mut remaining = 1;
        core::iter::from_fn(move || {
            if remaining == 0 {
                return None;
            }
            remaining -= 1;
            Some(input.get())
        })
    });
    assert_eq!(r.resume(10), Ok(10));
    assert_eq!(r.resume(20), Ok(10));
    assert_eq!(r.resume(30), Err(ResumeError::Completed));
    assert_eq!(r.advance(40), Err(ResumeError::Completed));
    assert_eq!(
        format!("{r:?}"),
        "Resumable { input: InputCell(20), current: Some(10), alive: false, .. }"
    );
    assert_eq!(r.into_current(), Some(10));
}

#[test]
fn producer_sees_latest_input() {
    let mut r = Resumable::new(|input: InputCell<String>| {
        core::iter::repeat_with(move || input.get())
    });
    for word in ["alpha", "beta", "gamma"] {
        assert_eq!(r.resume(word.to_string()), Ok(word.to_string()));
    }
}

#[test]
fn echo_plus_one_from_zero() {
    let mut r = Resumable::new(|input: InputCell<i32>| {
        let mut x = 0;
        let mut started = false;
        core::iter::from_fn(move || {
            if started {
                x = input.get();
            }
            started = true;
            Some(x + 1)
        })
    });
    r.assert_yields(5, 1).assert_yields(5, 6).assert_yields(0, 1);
}

#[test]
fn with_input_seeds_the_cell() {
    let mut r = Resumable::with_input(41, |input: InputCell<i32>| {
        let seed = input.get();
        core::iter::once(seed + 1)
    });
    r.assert_yields(0, 42).assert_finishes(0, 42);
}

#[test]
fn advance_does_not_require_clone() {
    struct Token(u32);
    let mut r = Resumable::new(|_: InputCell<()>| (1..=2).map(Token));
    assert_eq!(r.advance(()), Ok(true));
    assert_eq!(r.current().map(|t| t.0), Some(1));
    assert_eq!(r.advance(()), Ok(true));
    assert_eq!(r.advance(()), Ok(false));
    assert_eq!(r.current().map(|t| t.0), Some(2));
    assert_eq!(r.advance(()), Err(ResumeError::Completed));
}

#[test]
fn infinite_producer_stays_alive() {
    let mut r = yield_with(|n: &u64| n * n);
    for n in 0..1000 {
        assert_eq!(r.resume(n), Ok(n * n));
        assert!(r.is_alive());
    }
}

#[test]
fn yield_with_keeps_closure_state() {
    let mut length = 0;
    yield_with(move |s: &&str| {
        length += s.len();
        length
    })
    .assert_yields("foo", 3)
    .assert_yields("bar", 6)
    .assert_yields("baz", 9);
}

#[test]
fn from_control_flow_stops_on_sentinel() {
    from_control_flow(|n: &i32| {
        if *n == 0 {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(100 / n)
        }
    })
    .assert_yields(4, 25)
    .assert_yields(50, 2)
    .assert_finishes(0, 2)
    .assert_completed(1);
}

#[test]
fn drive_stops_at_completion() {
    let mut r = one_two_three();
    let produced: Vec<i32> = r.drive(["a", "b", "c", "d", "e"]).collect();
    assert_eq!(produced, vec![1, 2, 3]);
    assert!(!r.is_alive());
    assert_eq!(r.drive(["f"]).count(), 0);
}

#[test]
fn drive_stops_when_inputs_run_out() {
    let mut r = one_two_three();
    assert_eq!(r.drive(["a", "b"]).collect::<Vec<_>>(), vec![1, 2]);
    assert!(r.is_alive());
    r.assert_yields("c", 3).assert_finishes("d", 3);
}

#[test]
fn drive_does_not_consume_inputs_after_completion() {
    let mut r = Resumable::new(|_: InputCell<i32>| [7]);
    let mut inputs = [1, 2, 3, 4].into_iter();
    assert_eq!(r.drive(inputs.by_ref()).collect::<Vec<_>>(), vec![7]);
    // One input produced 7, one discovered exhaustion.
    assert_eq!(inputs.next(), Some(3));
}

#[test]
fn producer_errors_pass_through() {
    let mut r = Resumable::new(|input: InputCell<&'static str>| {
        core::iter::repeat_with(move || input.get().parse::<i32>())
    });
    assert_eq!(r.advance("12"), Ok(true));
    assert_eq!(r.current(), Some(&Ok(12)));
    assert_eq!(r.advance("twelve"), Ok(true));
    assert!(matches!(r.current(), Some(Err(_))));
    assert!(r.is_alive());
}

#[test]
fn error_message() {
    assert_eq!(
        ResumeError::Completed.to_string(),
        "cannot resume a completed computation"
    );
}
