// ABOUTME: Sample measurement history used by the --demo flag
// ABOUTME: Four readings over two months showing steady weight loss
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{TimeZone, Utc};
use titanfit::models::BodyMetric;

/// (year, month, day, weight, muscle mass, body fat)
const SAMPLES: [(i32, u32, u32, f64, f64, f64); 4] = [
    (2023, 10, 1, 80.5, 38.0, 20.0),
    (2023, 10, 15, 79.8, 38.2, 19.5),
    (2023, 11, 1, 79.0, 38.5, 18.8),
    (2023, 11, 15, 78.5, 38.8, 18.2),
];

/// Build the sample history
pub fn demo_metrics() -> Vec<BodyMetric> {
    SAMPLES
        .iter()
        .filter_map(|&(year, month, day, weight, muscle, fat)| {
            Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
                .single()
                .map(|date| {
                    BodyMetric::new(date, weight)
                        .with_muscle_mass(muscle)
                        .with_body_fat(fat)
                })
        })
        .collect()
}
