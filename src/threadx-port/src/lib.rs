//! Selects the ThreadX port module for the microcontroller being built for.
//!
//! The build script resolves the enabled target features (and any
//! `--cfg context=".."` values) through the decision table in
//! `threadx-port-table`, and this crate binds the resolved module as
//! [`port`]. The rest of the kernel only names `threadx_port::port` and the
//! [`Port`] contract, never a concrete architecture.
//!
//! There is no fallback: a build whose target matches no table entry fails.

#![cfg_attr(not(test), no_std)]

mod arch;

pub use arch::selected as port;
pub use arch::Port;
pub use port::Cpu;

/// Name of the selected port module.
pub const PORT: &str = env!("THREADX_PORT");

/// Table condition that selected the port, e.g. `arduino-arch-samd + samd51`.
pub const MATCHED: &str = env!("THREADX_PORT_MATCHED");

// The module bound above must be the one the build script resolved.
const _: () = {
    if !konst::string::eq_str(<Cpu as Port>::NAME, PORT) {
        const_panic::concat_panic!(
            "threadx-port: bound port `",
            <Cpu as Port>::NAME,
            "` does not match resolved port `",
            PORT,
            "`"
        );
    }
    let align = <Cpu as Port>::STACK_ALIGN;
    if !align.is_power_of_two() || <Cpu as Port>::MINIMUM_STACK % align != 0 {
        const_panic::concat_panic!(
            "threadx-port: minimum stack of ",
            <Cpu as Port>::MINIMUM_STACK,
            " bytes is not a multiple of the ",
            align,
            " byte stack alignment"
        );
    }
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_port_matches_resolution() {
        assert_eq!(<Cpu as Port>::NAME, PORT);
        assert!(!MATCHED.is_empty());
        assert!(PORT.starts_with("cortex_m"));
        assert!(PORT.ends_with(<Cpu as Port>::SHORT_NAME.trim_start_matches("cm")));
    }

    #[test]
    fn test_interrupt_posture() {
        assert_ne!(<Cpu as Port>::INT_DISABLE, <Cpu as Port>::INT_ENABLE);
    }
}
