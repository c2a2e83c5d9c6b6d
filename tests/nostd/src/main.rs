#![no_std]
#![no_main]

use ::resumable::{
    counter::count_to,
    driver::run_to_completion,
};

/// This function is called on panic.
#[panic_handler]
fn panic (_info: &'_ ::core::panic::PanicInfo)
  -> !
{
    loop {}
}

#[no_mangle] pub extern "C"
fn _start ()
  -> !
{
    let mut total = 0_u64;
    if run_to_completion(count_to(5), |value| total += value).is_err()
    || total != 10
    {
        panic!();
    }
    loop {}
}
