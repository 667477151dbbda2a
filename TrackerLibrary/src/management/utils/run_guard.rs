use std::sync::atomic::{AtomicBool, Ordering};

static RUN_ACTIVE: AtomicBool = AtomicBool::new(false);

pub struct RunGuard {
    flag: &'static AtomicBool,
}

impl RunGuard {
    pub fn acquire() -> Option<Self> {
        if RUN_ACTIVE.compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed).is_ok() {
            Some(RunGuard {
                flag: &RUN_ACTIVE
            })
        } else {
            None
        }
    }
}

impl Drop for RunGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
