macro_rules! bitpos {
    ($idx:expr) => {{
        let idx: usize = $idx;
        (idx >> 6, idx & 63)
    }};
}

macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        {
            tracing::trace!($($arg)*);
        }
    }};
}

pub(crate) use bitpos;
pub(crate) use trace;
