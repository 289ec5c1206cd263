// ABOUTME: Measurement commands for the titanfit CLI
// ABOUTME: Adds and deletes body metrics in the shared AppContext
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use titanfit::context::AppContext;
use titanfit::models::BodyMetric;
use tracing::info;
use uuid::Uuid;

/// Record a measurement
pub async fn add(
    app: &AppContext,
    weight: f64,
    fat: Option<f64>,
    muscle: Option<f64>,
    date: Option<NaiveDate>,
) {
    if !weight.is_finite() || weight <= 0.0 {
        println!("Error Peso inválido: {weight}");
        return;
    }

    let mut metric = date.map_or_else(
        || BodyMetric::now(weight),
        |day| {
            BodyMetric::new(
                Utc.from_utc_datetime(&day.and_time(NaiveTime::default())),
                weight,
            )
        },
    );
    if let Some(fat) = fat {
        metric = metric.with_body_fat(fat);
    }
    if let Some(muscle) = muscle {
        metric = metric.with_muscle_mass(muscle);
    }

    let id = app.add_metric(metric).await;
    info!(metric_id = %id, "Measurement recorded");
    println!("Success Medição salva ({id})");
}

/// Delete a measurement
pub async fn remove(app: &AppContext, id: Uuid) {
    if app.delete_metric(id).await {
        println!("Success Medição removida");
    } else {
        println!("Nenhuma medição com ID {id}");
    }
}
