#[macro_export]
macro_rules! expect {
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(t) => t,
            Err(why) => {
                panic!("{}: {:?}", $msg, why);
            }
        }
    };
}

#[macro_export]
macro_rules! akari_error {
    ($($args:tt)*) => {
        ::log::error!(target: "akari", $($args)*)
    };
}

#[macro_export]
macro_rules! akari_warn {
    ($($args:tt)*) => {
        ::log::warn!(target: "akari", $($args)*)
    };
}

#[macro_export]
macro_rules! akari_info {
    ($($args:tt)*) => {
        ::log::info!(target: "akari", $($args)*)
    };
}

#[macro_export]
macro_rules! akari_debug {
    ($($args:tt)*) => {
        ::log::debug!(target: "akari", $($args)*)
    };
}

#[macro_export]
macro_rules! akari_trace {
    ($($args:tt)*) => {
        ::log::trace!(target: "akari", $($args)*)
    };
}
