use crate::models::CatalogColor;
use chroma_delta::{Lab, Undertone};
use std::collections::HashMap;

/// Result of one catalog backfill sweep
#[derive(Debug, Default)]
pub struct BackfillStats {
    /// Records examined
    pub scanned: usize,

    /// Records whose Lab triple was filled in
    pub derived: usize,

    /// Undertone census over all scanned records
    pub undertones: HashMap<Undertone, usize>,
}

/// Fill missing Lab values across catalog records and take an undertone
/// census.
///
/// Records with a complete measured Lab triple are left untouched;
/// records missing any component get a full triple derived from their
/// RGB channels. Undertones are counted, never written back onto the
/// records. Persisting the mutated records is the caller's job.
pub fn backfill_derived(records: &mut [CatalogColor]) -> BackfillStats {
    let mut stats = BackfillStats::default();

    for record in records.iter_mut() {
        stats.scanned += 1;

        if record.stored_lab().is_none() {
            let lab = Lab::from(record.rgb());
            record.lab_l = Some(lab.l);
            record.lab_a = Some(lab.a);
            record.lab_b = Some(lab.b);
            stats.derived += 1;
        }

        let undertone = Undertone::classify(record.rgb(), record.lab_ab());
        *stats.undertones.entry(undertone).or_insert(0) += 1;
    }

    tracing::info!(
        scanned = stats.scanned,
        derived = stats.derived,
        "Catalog backfill complete"
    );

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Brand;

    fn color(id: i64, r: u8, g: u8, b: u8) -> CatalogColor {
        CatalogColor {
            id,
            name: format!("Color {id}"),
            hex: format!("#{r:02X}{g:02X}{b:02X}"),
            slug: format!("color-{id}"),
            color_number: format!("N-{id}"),
            r,
            g,
            b,
            lab_l: None,
            lab_a: None,
            lab_b: None,
            brand: Brand::new("Acme", "acme"),
        }
    }

    #[test]
    fn test_fills_only_missing_records() {
        let mut records = vec![color(1, 128, 128, 128), color(2, 200, 30, 30)];
        records[1].lab_l = Some(45.0);
        records[1].lab_a = Some(55.0);
        records[1].lab_b = Some(30.0);

        let stats = backfill_derived(&mut records);

        assert_eq!(stats.scanned, 2);
        assert_eq!(stats.derived, 1);

        let filled = records[0].stored_lab().unwrap();
        assert!((filled.l - 53.585).abs() < 0.01);

        // Measured values survive untouched
        assert_eq!(records[1].lab_l, Some(45.0));
        assert_eq!(records[1].lab_a, Some(55.0));
        assert_eq!(records[1].lab_b, Some(30.0));
    }

    #[test]
    fn test_partial_triple_is_replaced_wholesale() {
        let mut records = vec![color(1, 128, 128, 128)];
        records[0].lab_a = Some(99.0);

        let stats = backfill_derived(&mut records);

        assert_eq!(stats.derived, 1);
        let lab = records[0].stored_lab().expect("triple is complete now");
        assert!(lab.a.abs() < 1.0, "orphaned component was replaced");
    }

    #[test]
    fn test_census_covers_every_record() {
        // Classified on the Lab values the sweep itself derives: the red
        // lands warm of both thresholds, the rose is warm in a only, and
        // equal channels derive to a neutral a/b pair
        let mut records = vec![
            color(1, 200, 30, 30),
            color(2, 230, 180, 200),
            color(3, 128, 128, 128),
        ];

        let stats = backfill_derived(&mut records);

        let total: usize = stats.undertones.values().sum();
        assert_eq!(total, stats.scanned);
        assert_eq!(stats.undertones.get(&Undertone::Golden), Some(&1));
        assert_eq!(stats.undertones.get(&Undertone::Pink), Some(&1));
        assert_eq!(stats.undertones.get(&Undertone::Balanced), Some(&1));
    }

    #[test]
    fn test_census_uses_measured_ab_when_present() {
        // Near-gray with a measured pink cast; the hue path would have
        // called this Balanced
        let mut records = vec![color(1, 200, 197, 191)];
        records[0].lab_l = Some(79.0);
        records[0].lab_a = Some(5.0);
        records[0].lab_b = Some(-1.0);

        let stats = backfill_derived(&mut records);

        assert_eq!(stats.derived, 0);
        assert_eq!(stats.undertones.get(&Undertone::Pink), Some(&1));
    }

    #[test]
    fn test_empty_slice() {
        let stats = backfill_derived(&mut []);
        assert_eq!(stats.scanned, 0);
        assert_eq!(stats.derived, 0);
        assert!(stats.undertones.is_empty());
    }
}
