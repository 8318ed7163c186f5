use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;

use crate::domain::{Kind, Observation};

/// One chartable point projected onto the shared date domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
    pub kind: Kind,
}

/// The reconciled view of one loaded feed: records grouped by AOI and date,
/// plus the sorted union of all dates seen anywhere in the collection.
///
/// The date domain defines the shared x-axis; every series is projected onto
/// it with gaps left as absent points. Rebuilt wholesale on every load cycle.
#[derive(Debug, Default, Clone)]
pub struct ObservationSet {
    by_aoi: HashMap<String, HashMap<NaiveDate, Observation>>,
    date_domain: Vec<NaiveDate>,
    /// Fixed AOI scan order: configuration-declared keys first, then any
    /// AOI present only in the data, in ascending key order.
    aoi_order: Vec<String>,
    record_count: usize,
}

impl ObservationSet {
    pub fn new(records: Vec<Observation>, declared_order: &[String]) -> Self {
        let record_count = records.len();

        let mut by_aoi: HashMap<String, HashMap<NaiveDate, Observation>> = HashMap::new();
        let mut dates: BTreeSet<NaiveDate> = BTreeSet::new();
        for record in records {
            dates.insert(record.date);
            by_aoi
                .entry(record.aoi.clone())
                .or_default()
                .insert(record.date, record);
        }

        let mut aoi_order: Vec<String> = declared_order.to_vec();
        let mut extra: Vec<&String> = by_aoi
            .keys()
            .filter(|key| !aoi_order.contains(key))
            .collect();
        extra.sort();
        aoi_order.extend(extra.into_iter().cloned());

        Self {
            by_aoi,
            date_domain: dates.into_iter().collect(),
            aoi_order,
            record_count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }

    pub fn record_count(&self) -> usize {
        self.record_count
    }

    /// The sorted, deduplicated union of all observation dates.
    pub fn date_domain(&self) -> &[NaiveDate] {
        &self.date_domain
    }

    pub fn aoi_order(&self) -> &[String] {
        &self.aoi_order
    }

    pub fn get(&self, aoi: &str, date: NaiveDate) -> Option<&Observation> {
        self.by_aoi.get(aoi)?.get(&date)
    }

    /// Risk-score series for one AOI over the global date domain.
    ///
    /// Dates where the AOI has no record, or a record with a null score,
    /// produce no point (a gap; never interpolated).
    pub fn score_points(&self, aoi: &str) -> Vec<SeriesPoint> {
        self.date_domain
            .iter()
            .filter_map(|&date| {
                let obs = self.get(aoi, date)?;
                obs.rsi.map(|value| SeriesPoint {
                    date,
                    value,
                    kind: obs.kind,
                })
            })
            .collect()
    }

    /// Shifted-price series for one AOI over the global date domain.
    ///
    /// Price is treated as AOI-independent on dates where an AOI's own feed
    /// is missing: the first non-null `price_shift3` found by scanning the
    /// other AOIs in the fixed `aoi_order` fills the gap. The emitted point
    /// keeps the kind of the observation that actually supplied the value,
    /// so forecast styling follows the data's origin.
    pub fn price_points(&self, aoi: &str) -> Vec<SeriesPoint> {
        self.date_domain
            .iter()
            .filter_map(|&date| self.price_at(aoi, date))
            .collect()
    }

    fn price_at(&self, aoi: &str, date: NaiveDate) -> Option<SeriesPoint> {
        if let Some(obs) = self.get(aoi, date) {
            if let Some(value) = obs.price_shift3 {
                return Some(SeriesPoint {
                    date,
                    value,
                    kind: obs.kind,
                });
            }
        }
        for other in &self.aoi_order {
            if other == aoi {
                continue;
            }
            if let Some(obs) = self.get(other, date) {
                if let Some(value) = obs.price_shift3 {
                    return Some(SeriesPoint {
                        date,
                        value,
                        kind: obs.kind,
                    });
                }
            }
        }
        None
    }

    /// Earliest domain date carrying at least one forecast observation.
    pub fn first_forecast_date(&self) -> Option<NaiveDate> {
        self.date_domain
            .iter()
            .copied()
            .find(|&date| self.any_forecast_on(date))
    }

    fn any_forecast_on(&self, date: NaiveDate) -> bool {
        self.by_aoi
            .values()
            .any(|dates| dates.get(&date).is_some_and(|obs| obs.is_forecast()))
    }

    /// Most recent non-forecast observation for one AOI, if any.
    ///
    /// Forecast rows never represent an actual reading, so they are skipped
    /// when deciding what a map marker should show.
    pub fn latest_actual(&self, aoi: &str) -> Option<&Observation> {
        let dates = self.by_aoi.get(aoi)?;
        dates
            .values()
            .filter(|obs| !obs.is_forecast())
            .max_by_key(|obs| obs.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn obs(aoi: &str, d: &str, rsi: Option<f64>, price: Option<f64>, kind: Kind) -> Observation {
        Observation {
            aoi: aoi.to_string(),
            date: date(d),
            rsi,
            price_shift3: price,
            kind,
        }
    }

    fn order() -> Vec<String> {
        vec!["ashburn".into(), "phoenix".into(), "dallas".into()]
    }

    #[test]
    fn date_domain_is_sorted_distinct_and_permutation_stable() {
        let records = vec![
            obs("phoenix", "2024-01-03", Some(0.2), None, Kind::Past),
            obs("ashburn", "2024-01-01", Some(0.3), Some(100.0), Kind::Past),
            obs("dallas", "2024-01-03", Some(0.4), None, Kind::Past),
            obs("ashburn", "2024-01-02", Some(0.5), None, Kind::Past),
        ];
        let mut reversed = records.clone();
        reversed.reverse();

        let a = ObservationSet::new(records, &order());
        let b = ObservationSet::new(reversed, &order());

        let expected = vec![date("2024-01-01"), date("2024-01-02"), date("2024-01-03")];
        assert_eq!(a.date_domain(), expected.as_slice());
        assert_eq!(a.date_domain(), b.date_domain());
    }

    #[test]
    fn score_series_leaves_gaps_for_missing_and_null_scores() {
        let set = ObservationSet::new(
            vec![
                obs("ashburn", "2024-01-01", Some(0.3), None, Kind::Past),
                obs("ashburn", "2024-01-02", None, Some(90.0), Kind::Past),
                obs("phoenix", "2024-01-03", Some(0.7), None, Kind::Past),
            ],
            &order(),
        );

        let points = set.score_points("ashburn");
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].date, date("2024-01-01"));
        assert_eq!(points[0].value, 0.3);
    }

    #[test]
    fn price_fallback_inherits_value_and_kind_from_supplying_aoi() {
        let set = ObservationSet::new(
            vec![
                obs("ashburn", "2024-01-01", Some(0.3), None, Kind::Past),
                obs("phoenix", "2024-01-01", Some(0.4), Some(120.0), Kind::Forecast),
            ],
            &order(),
        );

        let points = set.price_points("ashburn");
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].value, 120.0);
        assert_eq!(points[0].kind, Kind::Forecast);
    }

    #[test]
    fn price_fallback_scans_aois_in_declared_order() {
        // Both phoenix and dallas carry a price; phoenix comes first in the
        // declared order so its value wins.
        let set = ObservationSet::new(
            vec![
                obs("ashburn", "2024-01-01", Some(0.3), None, Kind::Past),
                obs("dallas", "2024-01-01", None, Some(300.0), Kind::Past),
                obs("phoenix", "2024-01-01", None, Some(200.0), Kind::Past),
            ],
            &order(),
        );

        let points = set.price_points("ashburn");
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].value, 200.0);
    }

    #[test]
    fn price_gap_when_no_aoi_has_a_value() {
        let set = ObservationSet::new(
            vec![
                obs("ashburn", "2024-01-01", Some(0.3), Some(100.0), Kind::Past),
                obs("ashburn", "2024-01-02", Some(0.8), None, Kind::Forecast),
            ],
            &order(),
        );

        let points = set.price_points("ashburn");
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].date, date("2024-01-01"));
        assert_eq!(points[0].value, 100.0);
    }

    #[test]
    fn first_forecast_date_finds_earliest_forecast_day() {
        let set = ObservationSet::new(
            vec![
                obs("ashburn", "2024-01-01", Some(0.1), None, Kind::Past),
                obs("ashburn", "2024-01-02", Some(0.2), None, Kind::Past),
                obs("ashburn", "2024-01-03", Some(0.3), None, Kind::Past),
                obs("phoenix", "2024-01-04", Some(0.4), None, Kind::Forecast),
                obs("ashburn", "2024-01-05", Some(0.5), None, Kind::Forecast),
            ],
            &order(),
        );

        assert_eq!(set.first_forecast_date(), Some(date("2024-01-04")));
    }

    #[test]
    fn first_forecast_date_is_none_without_forecast_rows() {
        let set = ObservationSet::new(
            vec![obs("ashburn", "2024-01-01", Some(0.1), None, Kind::Past)],
            &order(),
        );
        assert_eq!(set.first_forecast_date(), None);
    }

    #[test]
    fn latest_actual_skips_forecast_rows() {
        let set = ObservationSet::new(
            vec![
                obs("ashburn", "2024-01-01", Some(0.3), None, Kind::Past),
                obs("ashburn", "2024-01-02", Some(0.6), None, Kind::Past),
                obs("ashburn", "2024-01-03", Some(0.9), None, Kind::Forecast),
            ],
            &order(),
        );

        let latest = set.latest_actual("ashburn").unwrap();
        assert_eq!(latest.date, date("2024-01-02"));
        assert_eq!(latest.rsi, Some(0.6));
    }

    #[test]
    fn data_only_aois_append_to_scan_order_sorted() {
        let set = ObservationSet::new(
            vec![
                obs("zurich", "2024-01-01", None, Some(50.0), Kind::Past),
                obs("berlin", "2024-01-01", None, Some(60.0), Kind::Past),
            ],
            &order(),
        );

        let expected: Vec<String> = vec![
            "ashburn".into(),
            "phoenix".into(),
            "dallas".into(),
            "berlin".into(),
            "zurich".into(),
        ];
        assert_eq!(set.aoi_order(), expected.as_slice());
    }
}
