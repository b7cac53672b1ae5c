/**
 * =================================================================
 * APARATO: ARGOS INTEGRITY TEST
 * CLASIFICACIÓN: PROVING GROUNDS
 * RESPONSABILIDAD: CERTIFICACIÓN DE IDEMPOTENCIA DEL OBSERVADOR
 * =================================================================
 */

use kryptarch_shared_argos::init_tracing;

#[test]
fn certify_observer_ignition_is_idempotent() {
    // Una segunda ignición no debe entrar en pánico ni re-registrar
    // el suscriptor global.
    init_tracing("argos_integrity_test");
    init_tracing("argos_integrity_test");
    println!("✅ ARGOS: Observer double-ignition certified.");
}
