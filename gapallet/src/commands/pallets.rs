use std::io::Write;

use gapallet_models::pallet::PalletType;

/// Print the pallet catalog accepted by the quote form.
pub fn list(out: &mut impl Write) -> std::io::Result<()> {
    let width = PalletType::ALL
        .iter()
        .map(|pallet_type| pallet_type.label().len())
        .max()
        .unwrap_or_default();

    for pallet_type in PalletType::ALL {
        let dimensions = pallet_type.standard_dimensions().unwrap_or("any dimension");
        writeln!(out, "{:width$}  {dimensions}", pallet_type.label())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_pallet_type() {
        let mut out = Vec::new();

        list(&mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), PalletType::ALL.len());
        assert!(lines[0].starts_with("GMA Stringer Pallet "));
        assert!(lines[0].ends_with(r#"48" x 40" x 6""#));
        assert!(lines[9].starts_with("Custom Pallet "));
        assert!(lines[9].ends_with("any dimension"));
    }
}
