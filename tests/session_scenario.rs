//! End-to-end runs of the headless machine: power, boot, lock screen,
//! loading and the desktop, driven with synthetic instants.

use std::time::Instant;

use portfolio_os::core::auth::CREDENTIAL_HINT;
use portfolio_os::core::boot::BootPhase;
use portfolio_os::core::desktop::WindowId;
use portfolio_os::core::timer::ms;
use portfolio_os::core::{AuthOutcome, Cue, Key, Machine, OpenMode, Screen};

const BOOT_MS: u64 = 1000 + 2000 + 2000 + 1500;

fn type_text(m: &mut Machine, text: &str, now: Instant) {
    for c in text.chars() {
        m.key(Key::Char(c), now);
    }
}

fn booted(t0: Instant) -> Machine {
    let mut m = Machine::new(OpenMode::Desktop);
    m.toggle_power(t0);
    m.tick(t0 + ms(BOOT_MS));
    assert_eq!(m.screen(), Screen::Locked);
    m.drain_cues();
    m
}

fn in_session(t0: Instant) -> (Machine, Instant) {
    let mut m = booted(t0);
    let t1 = t0 + ms(BOOT_MS);
    type_text(&mut m, CREDENTIAL_HINT, t1);
    m.key(Key::Enter, t1);
    let t2 = t1 + ms(2500);
    m.tick(t2);
    assert_eq!(m.screen(), Screen::Session);
    m.drain_cues();
    (m, t2)
}

#[test]
fn wrong_then_right_password_walkthrough() {
    let t0 = Instant::now();
    let mut m = Machine::new(OpenMode::Desktop);
    m.toggle_power(t0);

    m.tick(t0 + ms(999));
    assert_eq!(m.boot_phase(), BootPhase::Off);
    m.tick(t0 + ms(1000));
    assert_eq!(m.boot_phase(), BootPhase::Bios1);
    m.tick(t0 + ms(3000));
    assert_eq!(m.boot_phase(), BootPhase::Bios2);
    m.tick(t0 + ms(5000));
    assert_eq!(m.boot_phase(), BootPhase::Bios3);
    m.tick(t0 + ms(6500));
    assert_eq!(m.screen(), Screen::Locked);
    assert_eq!(m.drain_cues(), vec![Cue::Startup]);

    let t1 = t0 + ms(6500);
    type_text(&mut m, "xxxx", t1);
    assert_eq!(m.key(Key::Enter, t1), Some(AuthOutcome::Denied));
    assert!(m.gate().error_flag());
    assert!(!m.is_authenticated());
    assert_eq!(
        m.drain_cues(),
        vec![Cue::KeyPress, Cue::KeyPress, Cue::KeyPress, Cue::KeyPress, Cue::Error]
    );

    m.tick(t1 + ms(999));
    assert_eq!(m.gate().buffer(), "xxxx");
    m.tick(t1 + ms(1000));
    assert_eq!(m.gate().buffer(), "");
    assert!(m.gate().error_flag());

    let t2 = t1 + ms(1200);
    type_text(&mut m, CREDENTIAL_HINT, t2);
    assert!(!m.gate().error_flag());
    assert_eq!(m.key(Key::Enter, t2), Some(AuthOutcome::Granted));
    assert_eq!(m.screen(), Screen::Loading(0));
    assert_eq!(m.drain_cues().last(), Some(&Cue::Startup));

    for step in 1..=50u64 {
        m.tick(t2 + ms(step * 50));
        if step < 50 {
            assert_eq!(m.screen(), Screen::Loading((step * 2) as u8));
        }
    }
    assert_eq!(m.loading_progress(), 100);
    assert_eq!(m.screen(), Screen::Session);
}

#[test]
fn power_off_mid_boot_leaves_no_stale_transition() {
    let t0 = Instant::now();
    let mut m = Machine::default();
    m.toggle_power(t0);
    m.tick(t0 + ms(1500));
    assert_eq!(m.boot_phase(), BootPhase::Bios1);

    m.toggle_power(t0 + ms(2000));
    m.tick(t0 + ms(60_000));
    assert_eq!(m.screen(), Screen::Off);

    let t1 = t0 + ms(61_000);
    m.toggle_power(t1);
    m.tick(t1 + ms(999));
    assert_eq!(m.screen(), Screen::Boot(BootPhase::Off));
    assert_eq!(m.power_cycles(), 2);
}

#[test]
fn credential_grants_once_per_cycle() {
    let t0 = Instant::now();
    let (mut m, t) = in_session(t0);
    assert!(m.is_authenticated());
    assert_eq!(m.key(Key::Enter, t), None);

    m.toggle_power(t);
    assert!(!m.is_authenticated());
    assert_eq!(m.loading_progress(), 0);

    let t1 = t + ms(10);
    m.toggle_power(t1);
    m.tick(t1 + ms(BOOT_MS));
    type_text(&mut m, "A013-2024", t1 + ms(BOOT_MS));
    assert_eq!(m.key(Key::Enter, t1 + ms(BOOT_MS)), Some(AuthOutcome::Denied));
    assert!(!m.is_authenticated());
}

#[test]
fn focus_restacks_open_windows() {
    let (mut m, _) = in_session(Instant::now());
    m.with_desktop(|d, cues| {
        d.open(WindowId::Projects, cues);
        d.open(WindowId::About, cues);
        d.open(WindowId::Skills, cues);
        d.focus(WindowId::Projects);
    });
    let desk = &m.session().unwrap().desktop;
    let top_down: Vec<WindowId> = desk.stacking_order().into_iter().rev().collect();
    assert_eq!(top_down, vec![WindowId::Projects, WindowId::Skills, WindowId::About]);
}

#[test]
fn reopening_emits_no_second_open_cue() {
    let (mut m, _) = in_session(Instant::now());
    m.with_desktop(|d, cues| d.activate_icon(WindowId::About, cues));
    let pos = m.session().unwrap().desktop.window(WindowId::About).position;
    m.with_desktop(|d, cues| d.activate_icon(WindowId::About, cues));

    let cues = m.drain_cues();
    assert_eq!(cues.iter().filter(|&&c| c == Cue::WindowOpen).count(), 1);
    assert_eq!(cues.iter().filter(|&&c| c == Cue::Click).count(), 2);
    assert_eq!(m.session().unwrap().desktop.window(WindowId::About).position, pos);
}

#[test]
fn battery_drains_only_during_session() {
    let t0 = Instant::now();
    let mut m = booted(t0);
    m.tick(t0 + ms(BOOT_MS + 30_000));
    assert_eq!(m.battery().level(), 100);

    let (mut m, t) = in_session(t0);
    m.tick(t + ms(5_000));
    assert_eq!(m.battery().level(), 95);
    m.toggle_charger();
    m.tick(t + ms(7_000));
    assert_eq!(m.battery().level(), 99);
    m.tick(t + ms(9_000));
    assert_eq!(m.battery().level(), 100);
}
