use crate::Port;

/// Cortex-M4 port.
pub struct Cpu;

impl Port for Cpu {
    const NAME: &'static str = "cortex_m4";
    const SHORT_NAME: &'static str = "cm4";
    const CORE: &'static str = "Cortex-M4";
    const ARCH: &'static str = "armv7em";

    const HAS_FPU: bool = true;
    const HAS_BASEPRI: bool = true;

    const MINIMUM_STACK: usize = 200;
    const TIMER_THREAD_STACK_SIZE: usize = 1024;
    const TIMER_THREAD_PRIORITY: u32 = 0;
    const STACK_ALIGN: usize = 8;

    const INT_DISABLE: u32 = 1;
    const INT_ENABLE: u32 = 0;

    const VERSION_ID: &'static str = "ThreadX Cortex-M4/GNU";

    /// `PRIMASK` value.
    type InterruptSave = u32;
}
