// Drives one counting generator to completion, printing each value it
// yields and then a completion message.
//
//     cargo run --example coroutine -- [COUNT]

use ::std::{
    error::Error,
    io::{self, Write},
};

use ::resumable::{
    counter::count_to,
    Driver,
};

const DEFAULT_COUNT: u64 = 5;

fn main ()
{
    ::env_logger::init();
    let stdout = io::stdout();
    if let Err(err) = run(::std::env::args().nth(1), &mut stdout.lock()) {
        eprintln!("error: {}", err);
        ::std::process::exit(1);
    }
}

fn run (
    count: Option<String>,
    out: &'_ mut dyn Write,
) -> Result<(), Box<dyn Error>>
{
    let count = match count {
        | Some(count) => count.parse::<u64>().map_err(|err| {
            format!("invalid count {:?}: {}", count, err)
        })?,
        | None => DEFAULT_COUNT,
    };
    let mut written = Ok(());
    Driver::new(count_to(count)).run_to_completion(|value| {
        if written.is_ok() {
            written = writeln!(out, "Yielded {}", value);
        }
    })?;
    written?;
    writeln!(out, "Coroutine finished.")?;
    Ok(())
}
