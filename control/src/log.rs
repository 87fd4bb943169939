macro_rules! info {
    ( $($arg:tt)+ ) => (
        #[cfg(feature = "defmt")]
        defmt::info!($($arg)+);
    );
}

macro_rules! error {
    ( $($arg:tt)+ ) => (
        #[cfg(feature = "defmt")]
        defmt::error!($($arg)+);
    );
}

pub(crate) use info;
pub(crate) use error;
