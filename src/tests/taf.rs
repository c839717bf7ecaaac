#[cfg(test)]
mod test {
    use crate::group::{AmountCode, TrendGroup};
    use crate::prelude::*;
    use crate::summary::{IcingSeverity, SkyCondition, TurbulenceSeverity};
    use crate::tests::toolkit::*;
    use crate::time;
    fn metadata() -> Metadata {
        Metadata::taf("UKLL", Some(time!("081100")), time!("081200"), time!("091200"))
    }
    #[test]
    fn prevailing_and_trends() {
        let groups = [
            time_span(time!("081200"), time!("091200"), "0812/0912"),
            wind(230, 7, "23007KT"),
            visibility(9999, "9999"),
            cloud_layer(AmountCode::Scattered, 30, "SCT030"),
            Group::new(
                GroupKind::Trend(
                    TrendGroup::new(TrendKind::Becmg)
                        .with_time_span(time!("081400"), time!("081600")),
                ),
                "BECMG 0814/0816",
            ),
            wind(270, 15, "27015KT"),
            Group::new(
                GroupKind::Trend(
                    TrendGroup::new(TrendKind::Tempo)
                        .with_time_span(time!("082000"), time!("090200")),
                ),
                "TEMPO 0820/0902",
            ),
            visibility(3000, "3000"),
            weather("SHRA"),
            Group::new(
                GroupKind::Trend(TrendGroup {
                    kind: TrendKind::From,
                    probability: None,
                    from: Some(time!("090600")),
                    until: None,
                    at: None,
                }),
                "FM090600",
            ),
            wind(300, 10, "30010KT"),
            cavok(),
        ];
        let summary = collate(&metadata(), &groups);

        assert_eq!(summary.report.report_type, ReportType::Taf);
        assert_eq!(summary.report.applicable_from, Some(Time::new(8, 12, 0)));
        assert_eq!(summary.report.applicable_until, Some(Time::new(9, 12, 0)));
        assert!(summary.current.weather_data.is_empty());

        let prevailing = &summary.forecast.prevailing;
        assert_eq!(prevailing.wind_direction_degrees, Some(230));
        assert_eq!(prevailing.visibility.prevailing.value, Some(9999.0));
        assert_eq!(prevailing.cloud_layers.len(), 1);

        let trends = &summary.forecast.trends;
        assert_eq!(trends.len(), 3);
        assert_eq!(trends[0].trend_type, TrendType::Becoming);
        assert_eq!(trends[0].time_from, Some(Time::new(8, 14, 0)));
        assert_eq!(trends[0].forecast.wind_direction_degrees, Some(270));
        assert_eq!(trends[1].trend_type, TrendType::Temporary);
        assert_eq!(trends[1].time_until, Some(Time::new(9, 2, 0)));
        assert_eq!(trends[1].forecast.visibility.prevailing.value, Some(3000.0));
        assert_eq!(trends[1].forecast.weather.len(), 1);
        assert_eq!(trends[2].trend_type, TrendType::Timed);
        assert_eq!(trends[2].time_from, Some(Time::new(9, 6, 0)));
        assert_eq!(trends[2].forecast.sky_condition, SkyCondition::Cavok);
        assert!(summary.is_clean());
    }
    #[test]
    fn time_span_not_covering_validity() {
        let groups = [
            time_span(time!("081400"), time!("081600"), "0814/0816"),
            wind(230, 7, "23007KT"),
        ];
        let summary = collate(&metadata(), &groups);
        assert!(summary.forecast.prevailing.is_empty());
        assert_eq!(summary.forecast.trends.len(), 1);
        assert_eq!(
            summary.forecast.trends[0].forecast.wind_direction_degrees,
            Some(230)
        );
    }
    #[test]
    fn layers_and_lowest_pressure() {
        let groups = [
            time_span(time!("081200"), time!("091200"), "0812/0912"),
            wind(230, 7, "23007KT"),
            icing(2, 3000, 7000, "620304"),
            lowest_qnh(29.92, "QNH2992INS"),
            trend(TrendKind::Tempo, "TEMPO"),
            turbulence('X', 0, 2000, "5X0002"),
            lowest_qnh(29.85, "QNH2985INS"),
        ];
        let summary = collate(&metadata(), &groups);
        let forecast = &summary.forecast;
        assert_eq!(forecast.prevailing_icing.len(), 1);
        assert_eq!(forecast.prevailing_icing[0].severity, IcingSeverity::Light);
        assert_eq!(forecast.prevailing_lowest_pressure, Pressure::inhg(29.92));
        assert!(forecast.prevailing_turbulence.is_empty());

        let trend = &forecast.trends[0];
        assert_eq!(trend.turbulence.len(), 1);
        assert_eq!(trend.turbulence[0].severity, TurbulenceSeverity::Extreme);
        assert_eq!(trend.lowest_pressure, Pressure::inhg(29.85));
        assert!(trend.icing.is_empty());
        assert!(summary.is_clean());
    }
    #[test]
    fn nosig_after_trend() {
        let metadata = Metadata::metar("EGLL", time!("011220"));
        let groups = [
            wind(230, 7, "23007KT"),
            trend(TrendKind::Becmg, "BECMG"),
            visibility(5000, "5000"),
            trend(TrendKind::Nosig, "NOSIG"),
        ];
        let summary = collate(&metadata, &groups);
        assert!(!summary.forecast.no_significant_changes);
        assert_eq!(summary.forecast.trends.len(), 1);
        assert_eq!(
            warnings(&summary),
            vec![(WarningMessage::InconsistentData, "NOSIG")]
        );
    }
    #[test]
    fn trend_after_nosig() {
        let metadata = Metadata::metar("EGLL", time!("011220"));
        let groups = [
            wind(230, 7, "23007KT"),
            visibility(9999, "9999"),
            trend(TrendKind::Nosig, "NOSIG"),
            trend(TrendKind::Tempo, "TEMPO"),
            visibility(3000, "3000"),
            wind(250, 15, "25015KT"),
            cloud_layer(AmountCode::Broken, 8, "BKN008"),
        ];
        let summary = collate(&metadata, &groups);
        assert!(summary.forecast.no_significant_changes);
        assert!(summary.forecast.trends.is_empty());
        // the refused trend body stays out of the observation
        let observed = &summary.current.weather_data;
        assert_eq!(observed.visibility.prevailing.value, Some(9999.0));
        assert_eq!(observed.wind_direction_degrees, Some(230));
        assert!(observed.cloud_layers.is_empty());
        assert_eq!(
            summary.report.plain_text,
            vec!["3000".to_string(), "25015KT".to_string(), "BKN008".to_string()]
        );
        assert_eq!(
            warnings(&summary),
            vec![(WarningMessage::InvalidGroup, "TEMPO")]
        );
    }
}
