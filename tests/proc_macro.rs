use ::resumable::{prelude::*, body::from_fn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Label)]
enum Handshake {
    Hello,
    Ack,
    Bye,
}

#[test]
fn derived_label ()
{
    assert_eq!(<Handshake as Label>::COUNT, 3);
    assert_eq!(Handshake::Ack.ordinal(), 1);
    assert_eq!(Handshake::Bye.name(), "Bye");
    let mut counters = <Handshake as Label>::counters();
    counters.as_mut()[Handshake::Bye.ordinal()] += 1;
    assert_eq!(counters, [0, 0, 1]);
}

#[test]
fn derived_label_drives_a_body ()
{
    let body = from_fn(0_u8, |retries: &mut u8, from: Option<Handshake>, ok: bool| {
        match from {
            | None => Step::Yield(Handshake::Hello, "hello"),
            | Some(Handshake::Hello) if !ok => {
                *retries += 1;
                Step::Yield(Handshake::Hello, "hello")
            },
            | Some(Handshake::Hello) => Step::Yield(Handshake::Ack, "ack"),
            | Some(Handshake::Ack) => Step::Yield(Handshake::Bye, "bye"),
            | Some(Handshake::Bye) => Step::Return(*retries),
        }
    });
    let mut generator = GeneratorState::new(body);
    let mut sent = vec![];
    for ok in [true, false, false, true, true, true] {
        match generator.resume(ok).unwrap() {
            | YieldOutcome::Yielded(message) => sent.push(message),
            | YieldOutcome::Finished(retries) => {
                assert_eq!(retries, 2);
                break;
            },
        }
    }
    assert_eq!(sent, ["hello", "hello", "hello", "ack", "bye"]);
    assert_eq!(generator.visits(Handshake::Hello), 3);
    assert_eq!(generator.visits(Handshake::Ack), 1);
    assert!(generator.is_finished());
}
