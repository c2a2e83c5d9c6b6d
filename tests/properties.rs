use ::resumable::{
    counter::{count_to, Counter},
    prelude::*,
};

fn drain (generator: &'_ mut GeneratorState<Counter>)
  -> (Vec<u64>, usize)
{
    let mut yielded = vec![];
    let mut finishes = 0;
    loop {
        match generator.resume(()) {
            | Ok(YieldOutcome::Yielded(value)) => yielded.push(value),
            | Ok(YieldOutcome::Finished(())) => finishes += 1,
            | Err(ResumeError::IllegalResume) => break,
            | Err(err) => panic!("unexpected error: {}", err),
        }
    }
    (yielded, finishes)
}

#[test]
fn yields_zero_to_n_then_finishes_once ()
{
    for n in 0 ..= 64 {
        let (yielded, finishes) = drain(&mut count_to(n));
        assert_eq!(yielded, (0 .. n).collect::<Vec<_>>(), "n = {}", n);
        assert_eq!(finishes, 1, "n = {}", n);
    }
}

#[test]
fn completed_is_terminal ()
{
    for n in [0, 1, 7] {
        let mut generator = count_to(n);
        assert_eq!(generator.gen_iter().finish(), Ok(()));
        for _ in 0 .. 1_000 {
            assert_eq!(generator.resume(()), Err(ResumeError::IllegalResume));
        }
        assert_eq!(generator.position(), Position::Completed);
    }
}

#[test]
fn position_strictly_increases ()
{
    let mut generator = count_to(32);
    let mut previous = None::<Position<_>>;
    while let Ok(YieldOutcome::Yielded(value)) = generator.resume(()) {
        let position = generator.position();
        let suspension = *position.suspension().unwrap();
        assert_eq!(suspension.iteration, value);
        assert_eq!(suspension.step, value);
        if let Some(previous) = previous {
            assert!(position > previous, "{:?} <= {:?}", position, previous);
        }
        previous = Some(position);
    }
    assert!(generator.position() > previous.unwrap());
}

#[test]
fn interleaved_instances_are_isolated ()
{
    let mut short = count_to(3);
    let mut long = count_to(8);
    let (mut from_short, mut from_long) = (vec![], vec![]);
    let (mut short_done, mut long_done) = (false, false);
    let mut turn = 0_u32;
    while !(short_done && long_done) {
        turn += 1;
        // two resumes of `long` for each one of `short`.
        let (generator, out, done) = if turn % 3 == 0 && !short_done || long_done {
            (&mut short, &mut from_short, &mut short_done)
        } else {
            (&mut long, &mut from_long, &mut long_done)
        };
        match generator.resume(()).unwrap() {
            | YieldOutcome::Yielded(value) => out.push(value),
            | YieldOutcome::Finished(()) => *done = true,
        }
    }
    assert_eq!(from_short, drain(&mut count_to(3)).0);
    assert_eq!(from_long, drain(&mut count_to(8)).0);
}

#[test]
fn five ()
{
    let mut generator = GeneratorState::<Counter>::create(5);
    for expected in 0 .. 5 {
        assert_eq!(generator.resume(()), Ok(YieldOutcome::Yielded(expected)));
    }
    assert_eq!(generator.resume(()), Ok(YieldOutcome::Finished(())));
    assert_eq!(generator.resume(()), Err(ResumeError::IllegalResume));
}

#[test]
fn zero ()
{
    let mut generator = GeneratorState::<Counter>::create(0);
    assert_eq!(generator.position(), Position::NotStarted);
    assert_eq!(generator.resume(()), Ok(YieldOutcome::Finished(())));
    assert_eq!(generator.yields(), 0);
}

#[test]
fn abandoning_is_free ()
{
    for stop_after in 0 .. 4 {
        let mut generator = count_to(10);
        for _ in 0 .. stop_after {
            let _ = generator.resume(());
        }
        drop(generator);
    }
    let mut driver = Driver::new(count_to(10));
    assert_eq!(driver.run_for(4, drop), Ok(None));
    assert_eq!(driver.resumes(), 4);
    driver.abandon();
}
