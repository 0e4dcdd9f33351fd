use windows_sys::Win32::Foundation::FILETIME;
use windows_sys::Win32::System::SystemInformation::GetSystemTimes;

use crate::health::Unavailable;
use crate::health::cpu::TickSample;

pub fn read_cumulative_ticks() -> Result<TickSample, Unavailable> {
    let mut idle = zero_filetime();
    let mut kernel = zero_filetime();
    let mut user = zero_filetime();

    // Kernel time includes idle time, so kernel + user matches the idle
    // counter's epoch and units.
    let ok = unsafe { GetSystemTimes(&mut idle, &mut kernel, &mut user) };
    if ok == 0 {
        return Err(Unavailable("cpu"));
    }

    let idle = filetime_to_u64(&idle);
    let total = filetime_to_u64(&kernel).wrapping_add(filetime_to_u64(&user));
    Ok(TickSample { idle, total })
}

fn zero_filetime() -> FILETIME {
    FILETIME {
        dwLowDateTime: 0,
        dwHighDateTime: 0,
    }
}

fn filetime_to_u64(ft: &FILETIME) -> u64 {
    ((ft.dwHighDateTime as u64) << 32) | ft.dwLowDateTime as u64
}
