//! Scoped override of the numeric locale for the calling thread.
//!
//! Uses the per-thread `uselocale(3)` API rather than `setlocale(3)` so that
//! the override never leaks into other threads.

#[cfg(target_os = "linux")]
pub struct NumericLocaleGuard {
    previous: libc::locale_t,
    forced: libc::locale_t,
}

#[cfg(target_os = "linux")]
impl NumericLocaleGuard {
    /// Switches this thread's `LC_NUMERIC` to "C" until the guard drops.
    /// Returns `None` if the C locale cannot be instantiated; callers carry on
    /// under the ambient locale in that case.
    pub fn c_numeric() -> Option<Self> {
        // SAFETY: "C" is a valid NUL-terminated locale name and a null base
        // asks for a fresh locale object that we own until `freelocale`.
        let forced = unsafe {
            libc::newlocale(libc::LC_NUMERIC_MASK, c"C".as_ptr(), std::ptr::null_mut())
        };
        if forced.is_null() {
            return None;
        }

        // SAFETY: `forced` is a live locale object from `newlocale`.
        let previous = unsafe { libc::uselocale(forced) };
        if previous.is_null() {
            // SAFETY: `forced` was never installed, so it is still ours to free.
            unsafe { libc::freelocale(forced) };
            return None;
        }

        Some(Self { previous, forced })
    }
}

#[cfg(target_os = "linux")]
impl Drop for NumericLocaleGuard {
    fn drop(&mut self) {
        // SAFETY: `previous` is the handle `uselocale` returned on entry and
        // `forced` stops being current before it is freed.
        unsafe {
            libc::uselocale(self.previous);
            libc::freelocale(self.forced);
        }
    }
}

#[cfg(not(target_os = "linux"))]
pub struct NumericLocaleGuard;

#[cfg(not(target_os = "linux"))]
impl NumericLocaleGuard {
    pub fn c_numeric() -> Option<Self> {
        Some(Self)
    }
}

#[cfg(all(test, target_os = "linux"))]
mod tests {
    use super::*;

    fn current_locale() -> libc::locale_t {
        // SAFETY: a null argument only queries the current thread locale.
        unsafe { libc::uselocale(std::ptr::null_mut()) }
    }

    #[test]
    fn test_guard_installs_and_restores() {
        let before = current_locale();
        {
            let guard = NumericLocaleGuard::c_numeric().expect("C locale available");
            assert_eq!(current_locale(), guard.forced);
            assert_ne!(current_locale(), before);
        }
        assert_eq!(current_locale(), before);
    }

    #[test]
    fn test_guard_restores_on_early_return() {
        fn failing_parse() -> Result<f64, std::num::ParseFloatError> {
            let _guard = NumericLocaleGuard::c_numeric();
            "12,5".parse::<f64>()
        }

        let before = current_locale();
        assert!(failing_parse().is_err());
        assert_eq!(current_locale(), before);
    }
}
