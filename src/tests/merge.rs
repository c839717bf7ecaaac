#[cfg(test)]
mod test {
    use crate::group::AmountCode;
    use crate::prelude::*;
    use crate::summary::SkyCondition;
    use crate::tests::toolkit::*;
    use crate::time;
    fn metar() -> Metadata {
        Metadata::metar("EDDF", time!("200950"))
    }
    #[test]
    fn identical_repeats() {
        let groups = [
            wind(250, 12, "25012KT"),
            visibility(8000, "8000"),
            qnh(1021.0, "Q1021"),
            wind(250, 12, "25012KT"),
            visibility(8000, "8000"),
            qnh(1021.0, "Q1021"),
        ];
        let summary = collate(&metar(), &groups);
        let essentials = &summary.current.weather_data;
        assert_eq!(essentials.wind_direction_degrees, Some(250));
        assert_eq!(essentials.visibility.prevailing.value, Some(8000.0));
        assert_eq!(essentials.sea_level_pressure, Pressure::hpa(1021.0));
        assert!(summary.is_clean());
    }
    #[test]
    fn conflict_resets_only_the_field() {
        let groups = [
            wind(250, 12, "25012KT"),
            visibility(8000, "8000"),
            visibility(6000, "6000"),
            visibility(5000, "5000"),
            qnh(1021.0, "Q1021"),
        ];
        let summary = collate(&metar(), &groups);
        let essentials = &summary.current.weather_data;
        // once reset, the field accepts a new value
        assert_eq!(essentials.visibility.prevailing.value, Some(5000.0));
        assert_eq!(essentials.wind_direction_degrees, Some(250));
        assert_eq!(essentials.sea_level_pressure, Pressure::hpa(1021.0));
        assert_eq!(
            warnings(&summary),
            vec![(WarningMessage::DuplicatedData, "6000")]
        );
    }
    #[test]
    fn gust_conflict_resets_whole_wind() {
        let groups = [
            wind_gusting(250, 12, Some(25), "25012G25KT"),
            wind_gusting(250, 12, Some(30), "25012G30KT"),
            variable_sector(220, 280, "220V280"),
        ];
        let summary = collate(&metar(), &groups);
        let essentials = &summary.current.weather_data;
        assert_eq!(essentials.wind_direction_degrees, None);
        assert!(essentials.wind_speed.value.is_none());
        assert!(essentials.gust_speed.value.is_none());
        assert_eq!(essentials.wind_direction_var_from_degrees, Some(220));
        assert_eq!(essentials.wind_direction_var_to_degrees, Some(280));
        assert_eq!(summary.warnings_for("25012G30KT").count(), 1);
    }
    #[test]
    fn cavok_against_clouds() {
        let groups = [
            cloud_layer(AmountCode::Broken, 12, "BKN012"),
            cavok(),
        ];
        let summary = collate(&metar(), &groups);
        let essentials = &summary.current.weather_data;
        assert!(!essentials.cavok);
        assert_eq!(essentials.cloud_layers.len(), 1);
        assert_eq!(
            warnings(&summary),
            vec![(WarningMessage::DuplicatedData, "CAVOK")]
        );
    }
    #[test]
    fn clouds_against_cavok() {
        let groups = [
            cavok(),
            cloud_layer(AmountCode::Broken, 12, "BKN012"),
        ];
        let summary = collate(&metar(), &groups);
        let essentials = &summary.current.weather_data;
        assert!(!essentials.cavok);
        assert_eq!(essentials.visibility, DistanceRange::default());
        assert_eq!(essentials.sky_condition, SkyCondition::Unknown);
        assert!(essentials.cloud_layers.is_empty());
        assert_eq!(
            warnings(&summary),
            vec![(WarningMessage::DuplicatedData, "BKN012")]
        );
    }
    #[test]
    fn no_significant_weather() {
        let groups = [
            trend(TrendKind::Becmg, "BECMG"),
            keyword(crate::group::Keyword::Nsw, "NSW"),
            weather("RA"),
        ];
        let summary = collate(&metar(), &groups);
        let trend = &summary.forecast.trends[0].forecast;
        assert!(!trend.no_significant_weather);
        assert!(trend.weather.is_empty());
        assert_eq!(
            warnings(&summary),
            vec![(WarningMessage::InconsistentData, "RA")]
        );
    }
    #[test]
    fn sections_are_independent() {
        let groups = [
            trend(TrendKind::Tempo, "TEMPO"),
            wind(250, 12, "25012KT"),
            trend(TrendKind::Becmg, "BECMG"),
            wind(300, 20, "30020KT"),
        ];
        let summary = collate(&metar(), &groups);
        let trends = &summary.forecast.trends;
        assert_eq!(trends[0].forecast.wind_direction_degrees, Some(250));
        assert_eq!(trends[1].forecast.wind_direction_degrees, Some(300));
        assert!(summary.is_clean());
    }
}
