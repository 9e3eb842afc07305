//! Edge case and boundary condition tests
//!
//! These tests verify the system handles unusual inputs,
//! error conditions, and boundary values correctly.

use portfolio_core::reveal::{parse_level, parse_target};
use portfolio_core::validate::{validate_email, validate_message, validate_name};
use portfolio_core::{
    ContactForm, ContentMap, Field, PortfolioError, PreferenceStore, ProjectId, RevealAnimator,
    RevealKind, SiteConfig, Theme, ViewCoordinator,
};
use tempfile::TempDir;

// ============================================================================
// Validation Boundaries
// ============================================================================

/// Length rules count characters, not bytes
#[test]
fn test_multibyte_name_length() {
    assert!(validate_name("李雷").valid);
    assert!(!validate_name("李").valid);
}

/// Whitespace padding does not count toward the message length
#[test]
fn test_message_trimmed_before_length_check() {
    assert!(!validate_message("   123456789   ").valid);
    assert!(validate_message("   1234567890   ").valid);
}

#[test]
fn test_email_shapes() {
    let valid = ["a@b.co", "first.last@sub.domain.org", "x+tag@d.io"];
    let invalid = ["plain", "@b.com", "a@.", "a@b.", "a@b c.com", "a@b"];

    for email in valid {
        assert!(validate_email(email).valid, "{email} should be valid");
    }
    for email in invalid {
        assert!(!validate_email(email).valid, "{email} should be invalid");
    }
}

/// A rejected submit keeps the user's input
#[test]
fn test_rejected_submit_keeps_values() {
    let mut form = ContactForm::new();
    form.set(Field::Name, "Ana");
    form.set(Field::Email, "not-an-email");

    assert!(matches!(form.submit(), Err(PortfolioError::InvalidForm { .. })));
    assert_eq!(form.value(Field::Name), "Ana");
    assert_eq!(form.value(Field::Email), "not-an-email");
    assert_eq!(form.message(Field::Email), "Please enter a valid email address");
}

// ============================================================================
// Coordinator Boundaries
// ============================================================================

#[test]
fn test_project_id_zero_and_max() {
    let mut vc = ViewCoordinator::new(ContentMap::new(), &SiteConfig::default());
    assert!(vc.open_modal(ProjectId(0)).is_err());
    assert!(vc.open_modal(ProjectId(u32::MAX)).is_err());
}

#[test]
fn test_closing_closed_overlays() {
    let mut vc = ViewCoordinator::new(ContentMap::new(), &SiteConfig::default());
    vc.close_modal();
    vc.close_nav();
    assert!(!vc.scroll_locked());
}

#[test]
fn test_toast_saturates_at_end_of_time() {
    let mut vc = ViewCoordinator::new(ContentMap::new(), &SiteConfig::default());
    vc.show_toast(u64::MAX - 10, 3000);
    assert!(vc.poll_toast(u64::MAX - 1).is_none());
    assert!(vc.poll_toast(u64::MAX).is_some());
}

#[test]
fn test_negative_scroll_offsets() {
    // Overscroll bounce reports negative offsets
    let mut vc = ViewCoordinator::new(ContentMap::new(), &SiteConfig::default());
    assert_eq!(vc.on_scroll_sample(-30.0, 0.0), portfolio_core::HeaderState::Full);
}

// ============================================================================
// Reveal Attributes
// ============================================================================

#[test]
fn test_attribute_parsing_edges() {
    assert_eq!(parse_level(""), None);
    assert_eq!(parse_level("100"), Some(100));
    assert_eq!(parse_level("75.5"), Some(75));
    assert_eq!(parse_target(None, ""), None);
    assert_eq!(parse_target(Some("abc"), "12"), None);
    assert_eq!(parse_target(None, "  1200+"), Some(1200));
}

#[test]
fn test_rearming_keeps_first_registration() {
    let mut animator = RevealAnimator::new(&SiteConfig::default());
    animator.arm("x", RevealKind::FadeUp);
    animator.arm("x", RevealKind::Stat { target: 5 });
    assert_eq!(animator.on_intersect("x", 1.0).len(), 1);
}

// ============================================================================
// Preference Store
// ============================================================================

#[test]
fn test_store_reopen_after_many_toggles() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("prefs.redb");
    {
        let store = PreferenceStore::new(&path).unwrap();
        let mut theme = Theme::Light;
        for _ in 0..5 {
            theme = theme.toggled();
            store.save_theme(theme).unwrap();
        }
    }
    let store = PreferenceStore::new(&path).unwrap();
    assert_eq!(store.load().unwrap().theme, Theme::Dark);
}

#[test]
fn test_unknown_config_fields_ignored() {
    let config = SiteConfig::from_json(r#"{"unknown": 1, "map_zoom": 12}"#).unwrap();
    assert_eq!(config.map_zoom, 12);
}
