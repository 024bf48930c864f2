use std::ffi::CStr;
use std::os::raw::c_char;

pub struct Uname {
    pub sysname: String,
    pub release: String,
}

#[derive(Debug, Clone, Copy)]
pub struct HostStats {
    pub uptime_secs: u64,
    pub total_bytes: u64,
    pub free_bytes: u64,
}

pub fn hostname() -> Option<String> {
    let mut buf = [0 as c_char; 256];
    // Leave the last byte zeroed; truncated names are not guaranteed to be terminated.
    let rc = unsafe { libc::gethostname(buf.as_mut_ptr(), buf.len() - 1) };
    if rc != 0 {
        return None;
    }
    let name = unsafe { CStr::from_ptr(buf.as_ptr()) };
    Some(name.to_string_lossy().into_owned())
}

pub fn uname() -> Option<Uname> {
    let mut uts: libc::utsname = unsafe { std::mem::zeroed() };
    if unsafe { libc::uname(&mut uts) } != 0 {
        return None;
    }
    Some(Uname {
        sysname: field_to_string(&uts.sysname),
        release: field_to_string(&uts.release),
    })
}

fn field_to_string(field: &[c_char]) -> String {
    let bytes: Vec<u8> = field
        .iter()
        .take_while(|&&c| c != 0)
        .map(|&c| c as u8)
        .collect();
    String::from_utf8_lossy(&bytes).into_owned()
}

#[cfg(target_os = "linux")]
pub fn memory_and_uptime() -> Option<HostStats> {
    let mut info: libc::sysinfo = unsafe { std::mem::zeroed() };
    if unsafe { libc::sysinfo(&mut info) } != 0 {
        return None;
    }
    let unit = u64::from(info.mem_unit.max(1));
    Some(HostStats {
        uptime_secs: info.uptime.max(0) as u64,
        total_bytes: (info.totalram as u64).saturating_mul(unit),
        free_bytes: (info.freeram as u64).saturating_mul(unit),
    })
}

#[cfg(not(target_os = "linux"))]
pub fn memory_and_uptime() -> Option<HostStats> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uname_reports_release() {
        let uts = uname().unwrap();
        assert!(!uts.sysname.is_empty());
        assert!(!uts.release.is_empty());
    }

    #[test]
    fn c_field_stops_at_nul() {
        let field = [b'L' as c_char, b'x' as c_char, 0, b'z' as c_char];
        assert_eq!(field_to_string(&field), "Lx");
    }
}
