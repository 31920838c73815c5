use threadx_port::{port, Cpu, Port, MATCHED, PORT};

#[test]
fn samd51_selects_cortex_m4() {
    assert_eq!(PORT, "cortex_m4");
    assert_eq!(MATCHED, "arduino-arch-samd + samd51");
}

#[test]
fn port_is_reachable_by_neutral_name() {
    assert_eq!(<port::Cpu as Port>::NAME, "cortex_m4");
    assert_eq!(<port::Cpu as Port>::SHORT_NAME, "cm4");
    assert_eq!(<Cpu as Port>::ARCH, "armv7em");
}

#[test]
fn cortex_m4_contract() {
    assert!(<Cpu as Port>::HAS_FPU);
    assert!(<Cpu as Port>::HAS_BASEPRI);
    assert_eq!(<Cpu as Port>::MINIMUM_STACK, 200);
    assert_eq!(<Cpu as Port>::STACK_ALIGN, 8);
    assert_eq!(<Cpu as Port>::INT_DISABLE, 1);
    assert_eq!(<Cpu as Port>::INT_ENABLE, 0);
}
