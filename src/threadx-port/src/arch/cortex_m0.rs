use crate::Port;

/// Cortex-M0 port.
///
/// Also serves Cortex-M0+ parts such as the SAMD21. ARMv6-M has neither
/// `BASEPRI` nor an FPU, so all masking goes through `PRIMASK`.
pub struct Cpu;

impl Port for Cpu {
    const NAME: &'static str = "cortex_m0";
    const SHORT_NAME: &'static str = "cm0";
    const CORE: &'static str = "Cortex-M0";
    const ARCH: &'static str = "armv6m";

    const HAS_FPU: bool = false;
    const HAS_BASEPRI: bool = false;

    const MINIMUM_STACK: usize = 200;
    const TIMER_THREAD_STACK_SIZE: usize = 1024;
    const TIMER_THREAD_PRIORITY: u32 = 0;
    const STACK_ALIGN: usize = 8;

    const INT_DISABLE: u32 = 1;
    const INT_ENABLE: u32 = 0;

    const VERSION_ID: &'static str = "ThreadX Cortex-M0/GNU";

    /// `PRIMASK` value.
    type InterruptSave = u32;
}
