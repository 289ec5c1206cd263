// ABOUTME: Fixed response schema constraining structured workout plan output
// ABOUTME: Expressed in the Gemini OpenAPI-subset schema dialect (OBJECT, ARRAY, STRING, NUMBER)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde_json::{json, Value};

/// Response schema for plan generation
///
/// Plan requires `name`, `goal`, `days`; each day requires `dayName`, `focus`,
/// `exercises`; each exercise requires `name`, `sets`, `reps` with optional `notes`.
#[must_use]
pub fn workout_plan_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "name": { "type": "STRING" },
            "goal": { "type": "STRING" },
            "days": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "dayName": { "type": "STRING" },
                        "focus": { "type": "STRING" },
                        "exercises": {
                            "type": "ARRAY",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "name": { "type": "STRING" },
                                    "sets": { "type": "NUMBER" },
                                    "reps": { "type": "STRING" },
                                    "notes": { "type": "STRING" }
                                },
                                "required": ["name", "sets", "reps"]
                            }
                        }
                    },
                    "required": ["dayName", "focus", "exercises"]
                }
            }
        },
        "required": ["name", "goal", "days"]
    })
}
