//! Integration tests for sis-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("infected_total.csv").exists());
        assert!(dir.path().join("new_infections.csv").exists());
        assert!(dir.path().join("recovery_age.csv").exists());
        assert!(dir.path().join("intervals.csv").exists());
    }

    #[test]
    fn csv_headers_name_each_run() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_infected_total(&[vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();
        w.write_recovery_ages(&[vec![10, -5]]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("infected_total.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["time", "run_0", "run_1", "run_2"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("recovery_age.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["agent", "run_0"]);
    }

    #[test]
    fn csv_wide_table_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_infected_total(&[vec![1, 2, 3], vec![7, 8, 9]]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("infected_total.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "0"); // time index
        assert_eq!(&rows[0][1], "1"); // run_0
        assert_eq!(&rows[0][2], "7"); // run_1
        assert_eq!(&rows[2][0], "2");
        assert_eq!(&rows[2][1], "3");
        assert_eq!(&rows[2][2], "9");
    }

    #[test]
    fn csv_intervals_long_format() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_intervals(&[vec![12, 40], vec![], vec![7]]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("intervals.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "0");
        assert_eq!(&rows[0][1], "12");
        assert_eq!(&rows[1][1], "40");
        assert_eq!(&rows[2][0], "2"); // the empty run 1 contributes no rows
        assert_eq!(&rows[2][1], "7");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn csv_empty_ensemble_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_infected_total(&[]).unwrap();
        w.write_intervals(&[]).unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn integration_csv() {
        use sis_core::SimParams;
        use sis_sim::Ensemble;

        let params = SimParams {
            agents:           30,
            initial_infected: 3,
            beta:             0.05,
            t_immunity:       50.0,
            t_recovery:       10.0,
            t_max:            20,
            t_equilibrium:    10,
            seed:             7,
        };
        let tables = Ensemble::new(params, 2).run_all().unwrap();

        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tables(&tables).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("infected_total.csv")).unwrap();
        assert_eq!(rdr.records().count(), 21); // t_max + 1 rows

        let mut rdr2 = csv::Reader::from_path(dir.path().join("recovery_age.csv")).unwrap();
        assert_eq!(rdr2.records().count(), 30); // one row per agent
    }
}
