/// Declarations every ThreadX port module provides to the kernel core.
///
/// This is the fixed-shape surface the rest of the kernel codes against,
/// whichever core was selected. Context switching, interrupt control and
/// the tick timer live in the port modules behind these declarations.
pub trait Port {
    /// Port module name, as resolved by the build script.
    const NAME: &'static str;
    /// Short port name, as used by the port headers (`tx_port_cm0`).
    const SHORT_NAME: &'static str;
    /// Core family this port targets.
    const CORE: &'static str;
    /// Architecture profile, as named by `rustc` target features.
    const ARCH: &'static str;

    /// Whether the port saves floating point context on a switch.
    const HAS_FPU: bool;
    /// Whether interrupts can be masked by priority (`BASEPRI`) instead of
    /// only globally (`PRIMASK`).
    const HAS_BASEPRI: bool;

    /// Smallest thread stack the port accepts, in bytes.
    const MINIMUM_STACK: usize;
    const TIMER_THREAD_STACK_SIZE: usize;
    const TIMER_THREAD_PRIORITY: u32;
    /// Required stack pointer alignment, in bytes.
    const STACK_ALIGN: usize;

    /// Interrupt posture value meaning "disabled".
    const INT_DISABLE: Self::InterruptSave;
    /// Interrupt posture value meaning "enabled".
    const INT_ENABLE: Self::InterruptSave;

    /// Port identification string.
    const VERSION_ID: &'static str;

    /// Saved interrupt posture, as returned when interrupts get disabled.
    type InterruptSave: Copy + Eq + core::fmt::Debug;
}

cfg_if::cfg_if! {
    if #[cfg(threadx_port = "cortex_m0")] {
        pub mod cortex_m0;
        pub use self::cortex_m0 as selected;
    } else if #[cfg(threadx_port = "cortex_m4")] {
        pub mod cortex_m4;
        pub use self::cortex_m4 as selected;
    } else if #[cfg(threadx_port = "cortex_m7")] {
        pub mod cortex_m7;
        pub use self::cortex_m7 as selected;
    } else {
        compile_error!("microcontroller family is not supported");
    }
}
