#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    UserProcess,
    Other,
}

/// The two fields of a login record that matter for counting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRecord {
    pub kind: SessionKind,
    pub user: String,
}

impl LoginRecord {
    pub fn is_active_user(&self) -> bool {
        self.kind == SessionKind::UserProcess && !self.user.is_empty()
    }
}

pub fn count_user_processes<I>(records: I) -> usize
where
    I: IntoIterator<Item = LoginRecord>,
{
    records.into_iter().filter(LoginRecord::is_active_user).count()
}

/// Counts interactive sessions in the utmp database. Returns 0 when the
/// database is missing or unreadable.
pub fn count_active_users() -> usize {
    let count = count_user_processes(login_records());
    tracing::debug!(users = count, "counted login sessions");
    count
}

#[cfg(target_os = "linux")]
fn login_records() -> Vec<LoginRecord> {
    use std::ffi::CStr;

    let mut records = Vec::new();

    // SAFETY: setutxent/getutxent/endutxent bracket one pass over the utmp
    // stream. Each returned entry is copied out before the next call reuses
    // libc's static buffer.
    unsafe {
        libc::setutxent();
        loop {
            let entry = libc::getutxent();
            if entry.is_null() {
                break;
            }
            let entry = &*entry;
            let kind = if entry.ut_type == libc::USER_PROCESS {
                SessionKind::UserProcess
            } else {
                SessionKind::Other
            };
            let user = CStr::from_bytes_until_nul(bytes_of(&entry.ut_user))
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|_| String::from_utf8_lossy(bytes_of(&entry.ut_user)).into_owned());
            records.push(LoginRecord { kind, user });
        }
        libc::endutxent();
    }

    records
}

#[cfg(target_os = "linux")]
fn bytes_of(field: &[libc::c_char]) -> &[u8] {
    // SAFETY: c_char and u8 share size and alignment.
    unsafe { std::slice::from_raw_parts(field.as_ptr().cast::<u8>(), field.len()) }
}

#[cfg(not(target_os = "linux"))]
fn login_records() -> Vec<LoginRecord> {
    Vec::new()
}
