/// A macro to signal that some code is unreachable. In debug mode this will panic if
/// the code is reached for some reason, but in release it will cause undefined behaviour!
///
/// ### Safety
///
/// The macro call must never be reached, otherwise undefined behaviour will occur.
#[macro_export]
macro_rules! unreachable_unchecked {
    (@inner $($arg:tt)*) => {{
        #[cfg(debug_assertions)]
        {
            // ideally all arguments would be passed to the unreachable macro,
            // but that does expand to non-const code at the moment
            ::core::panic!(concat!("internal error: entered unreachable code", $($arg)*));
        }
        #[cfg(not(debug_assertions))]
        unsafe {
            ::core::hint::unreachable_unchecked()
        }
    }};
    ($($e:expr)*) => {
        $crate::unreachable_unchecked!(@inner ": ", $($e)*)
    };
    () => {
        $crate::unreachable_unchecked!(@inner ".")
    };
}

/// A `for` loop over `start..end` that can be used in const fns.
#[macro_export]
macro_rules! iter_const {
    ( for $t:ident in $start:expr ,.. $end:expr => $bl:block ) => {{
        let mut $t = $start;
        if $t < $end {
            loop {
                $bl;

                $t += 1;
                if $t >= $end {
                    break;
                }
            }
        }
    }};
}
