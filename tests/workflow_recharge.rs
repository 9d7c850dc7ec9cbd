//! Recharge screen workflows: month selection, confirmation and exit.

mod common;

use bonokiosk::config::{Config, Labels};
use bonokiosk::navigation::ScreenId;
use bonokiosk::pass::{Month, PassType};
use common::Kiosk;
use crossterm::event::KeyCode;

fn bus_kiosk(month: Month) -> Kiosk {
    let mut kiosk = Kiosk::with_config(Config::default(), month);
    kiosk.login(1, "123456789012");
    assert_eq!(kiosk.current(), Some(ScreenId::Recharge(PassType::Bus)));
    kiosk
}

#[test]
fn test_recharge_screen_contents() {
    let mut kiosk = bus_kiosk(Month::May);
    let text = kiosk.screen_text();
    assert!(text.contains("TUSSAM - Recarga Bono Bus"));
    assert!(text.contains("TUSSAM - Transporte Urbano de Sevilla"));
    assert!(text.contains("Seleccione el mes para recargar su bono:"));
    assert!(text.contains("Mayo"));
    assert!(text.contains("✓ Recarga válida para todo el mes seleccionado"));
    assert!(text.contains("[ CONFIRMAR RECARGA ]"));
    assert!(text.contains("[ VOLVER ]"));
}

#[test]
fn test_metro_screen_uses_its_own_copy() {
    let mut kiosk = Kiosk::with_config(Config::default(), Month::May);
    kiosk.login(2, "123456789012");
    assert_eq!(kiosk.current(), Some(ScreenId::Recharge(PassType::Metro)));

    let text = kiosk.screen_text();
    assert!(text.contains("Metro de Sevilla - Recarga Bono Tren"));
    assert!(text.contains("Seleccione el mes para recargar su abono:"));
    assert!(text.contains("Recarga válida para todo el mes seleccionado"));
    assert!(!text.contains("✓"));
}

#[test]
fn test_month_change_updates_prompt() {
    let mut kiosk = bus_kiosk(Month::May);
    kiosk.press(KeyCode::Down);
    assert!(kiosk
        .screen_text()
        .contains("Mes seleccionado: Junio - ¿Desea continuar?"));

    kiosk.press(KeyCode::Left);
    kiosk.press(KeyCode::Left);
    assert!(kiosk
        .screen_text()
        .contains("Mes seleccionado: Abril - ¿Desea continuar?"));
}

#[test]
fn test_month_change_is_clamped_at_december() {
    let mut kiosk = bus_kiosk(Month::December);
    kiosk.press(KeyCode::Down);
    kiosk.press(KeyCode::Right);
    assert!(kiosk.screen_text().contains("Mes seleccionado: Diciembre"));
}

#[test]
fn test_confirmed_recharge_shows_success_notice() {
    let mut kiosk = bus_kiosk(Month::May);
    kiosk.press(KeyCode::Tab);
    kiosk.press(KeyCode::Enter);

    let text = kiosk.screen_text();
    assert!(text.contains("Confirmar recarga"));
    assert!(text.contains("Tipo de bono: BUS"));
    assert!(text.contains("Mes: Mayo"));
    assert!(text.contains("[ Sí ]"));

    // Yes is highlighted initially
    kiosk.press(KeyCode::Enter);
    let text = kiosk.screen_text();
    assert!(text.contains("Recarga exitosa"));
    assert!(text.contains("Bono Bus recargado correctamente para Mayo."));

    kiosk.press(KeyCode::Enter);
    assert!(!kiosk.screen_text().contains("Recarga exitosa"));
    assert_eq!(kiosk.current(), Some(ScreenId::Recharge(PassType::Bus)));
}

#[test]
fn test_declined_recharge_keeps_selection() {
    let mut kiosk = bus_kiosk(Month::May);
    kiosk.press(KeyCode::Down);
    kiosk.press(KeyCode::Tab);
    kiosk.press(KeyCode::Enter);
    kiosk.char('n');

    let text = kiosk.screen_text();
    assert!(!text.contains("Confirmar recarga"));
    assert!(!text.contains("Recarga exitosa"));
    assert!(text.contains("Mes seleccionado: Junio"));
}

#[test]
fn test_metro_success_copy() {
    let mut kiosk = Kiosk::with_config(Config::default(), Month::March);
    kiosk.login(2, "123456789012");
    kiosk.press(KeyCode::Tab);
    kiosk.press(KeyCode::Enter);
    assert!(kiosk.screen_text().contains("Tipo de abono: TREN"));
    kiosk.char('y');
    assert!(kiosk
        .screen_text()
        .contains("Bono de tren recargado correctamente para Marzo."));
}

#[test]
fn test_back_returns_to_fresh_login() {
    let mut kiosk = bus_kiosk(Month::May);
    kiosk.press(KeyCode::Esc);
    assert_eq!(kiosk.current(), Some(ScreenId::Login));
    let text = kiosk.screen_text();
    assert!(text.contains("-- Seleccione tipo de bono --"));
    // The card number typed before is gone
    assert!(text.contains("Introduzca un número de 12 dígitos"));
    assert!(!text.contains("123456789012"));

    let mut kiosk = bus_kiosk(Month::May);
    kiosk.press(KeyCode::Tab);
    kiosk.press(KeyCode::Tab);
    kiosk.press(KeyCode::Enter);
    assert_eq!(kiosk.current(), Some(ScreenId::Login));
}

#[test]
fn test_close_declined_then_screen_still_works() {
    let mut kiosk = bus_kiosk(Month::May);
    kiosk.char('q');
    let text = kiosk.screen_text();
    assert!(text.contains("Confirmar salida"));
    assert!(text.contains("¿Está seguro de que desea salir sin recargar?"));

    // Move the highlight to No and accept it
    kiosk.press(KeyCode::Right);
    kiosk.press(KeyCode::Enter);
    assert!(!kiosk.is_terminated());

    kiosk.press(KeyCode::Down);
    assert!(kiosk.screen_text().contains("Mes seleccionado: Junio"));
    kiosk.press(KeyCode::Tab);
    kiosk.press(KeyCode::Enter);
    assert!(kiosk.screen_text().contains("Confirmar recarga"));
}

#[test]
fn test_close_confirmed_terminates() {
    let mut kiosk = bus_kiosk(Month::May);
    kiosk.char('q');
    kiosk.char('y');
    assert!(kiosk.is_terminated());
    assert_eq!(kiosk.current(), None);
}

#[test]
fn test_keys_are_captured_while_dialog_is_open() {
    let mut kiosk = bus_kiosk(Month::May);
    kiosk.char('q');
    // Esc answers No instead of going back
    kiosk.press(KeyCode::Esc);
    assert_eq!(kiosk.current(), Some(ScreenId::Recharge(PassType::Bus)));
    assert!(!kiosk.screen_text().contains("Confirmar salida"));
}

#[test]
fn test_dialog_labels_come_from_config() {
    let config = Config {
        labels: Labels {
            ok: "Vale".to_string(),
            yes: "Confirmar".to_string(),
            no: "Cancelar".to_string(),
        },
        ..Config::default()
    };
    let mut kiosk = Kiosk::with_config(config, Month::May);
    kiosk.login(1, "123456789012");
    kiosk.char('q');

    let text = kiosk.screen_text();
    assert!(text.contains("[ Confirmar ]"));
    assert!(text.contains("[ Cancelar ]"));
}
