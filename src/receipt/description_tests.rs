use anyhow::{bail, Result};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

use super::description::split_prorata_marker;
use super::*;

#[test]
fn test_parse_description() -> Result<()> {
    let parsed: ParsedDescription = "Loyer Janvier Mr Jean Dupont Chambre 3 Charge 50".parse()?;

    assert_eq!(parsed.month_name, "Janvier");
    assert_eq!(parsed.room_number, 3);
    assert_eq!(parsed.tenant.to_string(), "Mr Jean Dupont");
    assert_eq!(parsed.charge_amount, dec!(50));
    assert_eq!(parsed.prorated_marker, None);

    Ok(())
}

#[test]
fn test_parse_description_fixes_misencoded_month() -> Result<()> {
    let parsed: ParsedDescription = "Loyer Ao\u{9e}t Mme Claire Martin Chambre 1 Charge 40".parse()?;
    assert_eq!(parsed.month_name, "Août");

    let parsed: ParsedDescription = "Loyer F\u{8e}vrier Mlle Anne Chambre 2 Charge 40".parse()?;
    assert_eq!(parsed.month_name, "Février");

    Ok(())
}

#[test]
fn test_parse_description_is_idempotent() -> Result<()> {
    let first: ParsedDescription = "Loyer D\u{8e}cembre Mme Claire Martin Chambre 4 Charge 45".parse()?;
    let rebuilt = format!(
        "Loyer {} {} Chambre {} Charge {}",
        first.month_name, first.tenant, first.room_number, first.charge_amount
    );
    let second: ParsedDescription = rebuilt.parse()?;

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_parse_description_with_prorata() -> Result<()> {
    let parsed: ParsedDescription = "Loyer Mars Mr Paul Durand Chambre 2 Charge 50 (PRORATA 15/03 -->)".parse()?;

    assert_eq!(parsed.prorated_marker.as_deref(), Some("PRORATA 15/03 -->"));
    assert_eq!(parsed.room_number, 2);
    assert_eq!(parsed.charge_amount, dec!(50));

    Ok(())
}

#[test]
fn test_prorata_group_is_removed_wherever_it_sits() -> Result<()> {
    let parsed: ParsedDescription = "Loyer Mars Mr Paul Durand (PRORATA --> 10/03) Chambre 2 Charge 50".parse()?;

    assert_eq!(parsed.tenant.names(), ["Paul", "Durand"]);
    assert_eq!(parsed.prorated_marker.as_deref(), Some("PRORATA --> 10/03"));

    Ok(())
}

#[test]
fn test_unclosed_prorata_group() {
    let description = "Loyer Mars Mr Paul Durand Chambre 2 Charge 50 (PRORATA 15/03 -->";
    assert_eq!(
        split_prorata_marker(description),
        Err(FormatError::ProrataShape(description.to_string()))
    );
}

#[test]
fn test_unknown_civility() -> Result<()> {
    for description in [
        "Loyer Janvier M. Jean Dupont Chambre 3 Charge 50",
        "Loyer Janvier mr Jean Dupont Chambre 3 Charge 50",
        "Loyer Janvier Jean Dupont Chambre 3 Charge 50",
    ] {
        match description.parse::<ParsedDescription>() {
            Err(FormatError::UnknownCivility(_)) => {},
            other => bail!("expected an unknown civility for `{}`, got {:?}", description, other),
        }
    }

    Ok(())
}

#[test]
fn test_missing_markers() -> Result<()> {
    match "Loyer Janvier Mr Jean Dupont Charge 50".parse::<ParsedDescription>() {
        Err(FormatError::MissingField { marker, .. }) => assert_eq!(marker, "Chambre"),
        other => bail!("expected a missing room, got {:?}", other),
    }

    match "Loyer Janvier Mr Jean Dupont Chambre 3 Charge".parse::<ParsedDescription>() {
        Err(FormatError::MissingField { marker, .. }) => assert_eq!(marker, "Charge"),
        other => bail!("expected a missing charge value, got {:?}", other),
    }

    Ok(())
}

#[test]
fn test_invalid_room_number() {
    assert_eq!(
        "Loyer Janvier Mr Jean Dupont Chambre trois Charge 50".parse::<ParsedDescription>(),
        Err(FormatError::InvalidNumber {
            field: "room number",
            value: "trois".to_string(),
        })
    );
}

#[test]
fn test_missing_tenant_name() -> Result<()> {
    match "Loyer Janvier Mr Chambre 3 Charge 50".parse::<ParsedDescription>() {
        Err(FormatError::MissingTenantName(_)) => Ok(()),
        other => bail!("expected a missing tenant name, got {:?}", other),
    }
}

#[test]
fn test_truncated_description() {
    assert_eq!(
        "Loyer".parse::<ParsedDescription>(),
        Err(FormatError::TruncatedDescription("Loyer".to_string()))
    );
}

#[test]
fn test_expand_civility() -> Result<()> {
    assert_eq!(expand_civility("Mr Jean Dupont")?, "Monsieur Jean Dupont");
    assert_eq!(expand_civility("Mme Claire de La Tour")?, "Madame Claire de La Tour");
    assert_eq!(expand_civility("Mlle Anne")?, "Mademoiselle Anne");
    assert!(expand_civility("M. Jean").is_err());

    Ok(())
}
