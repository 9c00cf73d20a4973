use medref_scores::calculators::{grace, meld, sofa};
use medref_scores::{CalculatorId, ScoreResult, calculate_clinical_score};
use serde_json::{Value, json};

fn run(calculator: &str, inputs: Value) -> ScoreResult {
    match calculate_clinical_score(calculator, &inputs) {
        Ok(result) => result,
        Err(e) => panic!("{calculator} failed: {e}"),
    }
}

// --- CURB-65 ---

#[test]
fn curb65_healthy_adult_is_low_risk() {
    let result = run(
        "curb65",
        json!({
            "confusion": false,
            "respiratoryRate": 20,
            "bloodPressure": { "systolic": 120, "diastolic": 80 },
            "age": 50
        }),
    );
    assert_eq!(result.score, 0.0);
    assert_eq!(result.max_score, 5.0);
    assert_eq!(result.risk_category, "Low Risk");
    assert_eq!(result.details.len(), 5);
}

#[test]
fn curb65_all_criteria_is_high_risk() {
    let result = run(
        "curb65",
        json!({
            "confusion": true,
            "urea": 25,
            "respiratoryRate": 32,
            "bloodPressure": { "systolic": 85, "diastolic": 55 },
            "age": 70
        }),
    );
    assert_eq!(result.score, 5.0);
    assert_eq!(result.risk_category, "High Risk");
    assert_eq!(result.interpretation, "High risk of mortality (57%)");
}

#[test]
fn curb65_low_urea_in_mmol_does_not_score() {
    // 5 mmol/L is 14 mg/dL BUN.
    let result = run(
        "curb65",
        json!({
            "confusion": false,
            "urea": 5,
            "respiratoryRate": 18,
            "bloodPressure": { "systolic": 120, "diastolic": 80 },
            "age": 40
        }),
    );
    assert_eq!(result.score, 0.0);
    assert!(result.details[1].ends_with("+0"));
}

#[test]
fn curb65_diastolic_sixty_counts_as_low() {
    let result = run(
        "curb65",
        json!({
            "confusion": false,
            "respiratoryRate": 18,
            "bloodPressure": { "systolic": 120, "diastolic": 60 },
            "age": 40
        }),
    );
    assert_eq!(result.score, 1.0);
    assert!(result.details[3].ends_with("+1"));
}

// --- Centor ---

#[test]
fn centor_older_adult_with_all_findings() {
    let result = run(
        "centor",
        json!({
            "fever": true,
            "tonsillarExudate": true,
            "tenderAnteriorNodes": true,
            "noCough": true,
            "age": 50
        }),
    );
    assert_eq!(result.score, 3.0);
    assert_eq!(result.risk_category, "Moderate Risk");
    assert_eq!(result.details[4], "Age ≥45: -1");
}

#[test]
fn centor_is_floored_at_zero() {
    let result = run(
        "centor",
        json!({
            "fever": false,
            "tonsillarExudate": false,
            "tenderAnteriorNodes": false,
            "noCough": false,
            "age": 60
        }),
    );
    assert_eq!(result.score, 0.0);
    assert_eq!(result.risk_category, "Very Low Risk");
    assert!(result.interpretation.starts_with("1-2.5%"));
}

#[test]
fn centor_child_gains_a_point() {
    let result = run(
        "centor",
        json!({
            "fever": true,
            "tonsillarExudate": false,
            "tenderAnteriorNodes": false,
            "noCough": false,
            "age": 10
        }),
    );
    assert_eq!(result.score, 2.0);
    assert_eq!(result.details[4], "Age 3-14: +1");
}

#[test]
fn centor_ages_between_bands_earn_nothing() {
    for (age, line) in [(14.5, "Age 14.5: +0"), (44.5, "Age 44.5: +0")] {
        let result = run(
            "centor",
            json!({
                "fever": true,
                "tonsillarExudate": false,
                "tenderAnteriorNodes": false,
                "noCough": false,
                "age": age
            }),
        );
        assert_eq!(result.score, 1.0, "age {age}");
        assert_eq!(result.details[4], line);
    }
}

#[test]
fn centor_band_edges_are_inclusive() {
    let score_at = |age: f64| {
        run(
            "centor",
            json!({
                "fever": true,
                "tonsillarExudate": true,
                "tenderAnteriorNodes": false,
                "noCough": false,
                "age": age
            }),
        )
        .score
    };
    assert_eq!(score_at(3.0), 3.0);
    assert_eq!(score_at(14.0), 3.0);
    assert_eq!(score_at(15.0), 2.0);
    assert_eq!(score_at(44.0), 2.0);
    assert_eq!(score_at(45.0), 1.0);
    assert_eq!(score_at(2.0), 2.0);
}

// --- Wells ---

#[test]
fn wells_dvt_alternative_diagnosis_goes_negative() {
    let result = run(
        "wells_dvt",
        json!({
            "activeCancer": false,
            "paralysisOrImmobilization": false,
            "recentlyBedridden": false,
            "localizedTenderness": false,
            "entireLegSwollen": false,
            "calfSwelling": false,
            "pittingEdema": false,
            "collateralVeins": false,
            "previousDVT": false,
            "alternativeDiagnosis": true
        }),
    );
    assert_eq!(result.score, -2.0);
    assert_eq!(result.risk_category, "Low Probability");
    assert_eq!(result.details.len(), 10);
    assert_eq!(result.details[9], "Alternative diagnosis as likely: -2");
}

#[test]
fn wells_pe_six_and_a_half_is_moderate() {
    let result = run(
        "wells_pe",
        json!({
            "clinicalDVTSigns": true,
            "peIsLikelyDiagnosis": false,
            "heartRateOver100": true,
            "immobilizationOrSurgery": false,
            "previousPEorDVT": false,
            "hemoptysis": true,
            "malignancy": true
        }),
    );
    assert_eq!(result.score, 6.5);
    assert_eq!(result.risk_category, "Moderate Probability");
    assert_eq!(result.details[2], "Heart rate >100: +1.5");
}

#[test]
fn wells_pe_seven_is_high() {
    let result = run(
        "wells_pe",
        json!({
            "clinicalDVTSigns": true,
            "peIsLikelyDiagnosis": true,
            "heartRateOver100": false,
            "immobilizationOrSurgery": false,
            "previousPEorDVT": false,
            "hemoptysis": true,
            "malignancy": false
        }),
    );
    assert_eq!(result.score, 7.0);
    assert_eq!(result.risk_category, "High Probability");
}

// --- HEART ---

#[test]
fn heart_middle_aged_suspicious_history() {
    let result = run(
        "heart",
        json!({
            "history": "highly_suspicious",
            "ecg": "normal",
            "age": 50,
            "riskFactors": 0,
            "troponin": "normal"
        }),
    );
    assert_eq!(result.score, 3.0);
    assert_eq!(result.risk_category, "Low Risk");
    assert_eq!(result.details[0], "History: Highly suspicious = +2");
}

#[test]
fn heart_breakdown_uses_clinical_wording() {
    let result = run(
        "heart",
        json!({
            "history": "moderately_suspicious",
            "ecg": "significant_st_depression",
            "age": 30,
            "riskFactors": 0,
            "troponin": "moderate"
        }),
    );
    assert_eq!(
        result.details,
        vec![
            "History: Moderately suspicious = +1",
            "ECG: Significant ST depression = +2",
            "Age <45 = +0",
            "Risk factors: None = +0",
            "Troponin 1-3x normal = +1",
        ]
    );

    let result = run(
        "heart",
        json!({
            "history": "slightly_suspicious",
            "ecg": "nonspecific_changes",
            "age": 30,
            "riskFactors": 3,
            "troponin": "high"
        }),
    );
    assert_eq!(result.details[1], "ECG: Non-specific changes = +1");
    assert_eq!(result.details[3], "Risk factors ≥3 = +2");
    assert_eq!(result.details[4], "Troponin ≥3x normal = +2");
}

#[test]
fn heart_maximal_presentation() {
    let result = run(
        "heart",
        json!({
            "history": "highly_suspicious",
            "ecg": "significant_st_depression",
            "age": 70,
            "riskFactors": 4,
            "troponin": "high"
        }),
    );
    assert_eq!(result.score, 10.0);
    assert_eq!(result.risk_category, "High Risk");
}

// --- CHA2DS2-VASc ---

#[test]
fn cha2ds2_vasc_female_sex_alone() {
    let result = run(
        "cha2ds2_vasc",
        json!({
            "congestiveHeartFailure": false,
            "hypertension": false,
            "age": 60,
            "diabetes": false,
            "strokeTIAThrombus": false,
            "vascularDisease": false,
            "sex": "female"
        }),
    );
    assert_eq!(result.score, 1.0);
    assert_eq!(result.risk_category, "Low Risk");
    assert!(result.recommendation.starts_with("For females"));
}

#[test]
fn cha2ds2_vasc_elderly_with_prior_stroke() {
    let result = run(
        "cha2ds2_vasc",
        json!({
            "congestiveHeartFailure": false,
            "hypertension": true,
            "age": 80,
            "diabetes": false,
            "strokeTIAThrombus": true,
            "vascularDisease": false,
            "sex": "male"
        }),
    );
    assert_eq!(result.score, 5.0);
    assert_eq!(result.risk_category, "Moderate-High Risk");
    assert!(result.interpretation.contains("6.7%"));
}

// --- GCS ---

#[test]
fn gcs_no_response_is_three() {
    let result = run(
        "gcs",
        json!({
            "eyeOpening": "none",
            "verbalResponse": "none",
            "motorResponse": "none"
        }),
    );
    assert_eq!(result.score, 3.0);
    assert_eq!(result.risk_category, "Severe");
    assert!(result.interpretation.contains("deep coma"));
    assert_eq!(result.details[0], "Eye opening (none): 1");
}

#[test]
fn gcs_fully_responsive_is_fifteen() {
    let result = run(
        "gcs",
        json!({
            "eyeOpening": "spontaneous",
            "verbalResponse": "oriented",
            "motorResponse": "obeys_commands"
        }),
    );
    assert_eq!(result.score, 15.0);
    assert_eq!(result.risk_category, "Mild");
    assert_eq!(result.details[2], "Motor response (obeys commands): 6");
}

// --- qSOFA ---

#[test]
fn qsofa_thresholds_are_inclusive() {
    let result = run(
        "qsofa",
        json!({
            "respiratoryRate": 22,
            "alteredMentalStatus": false,
            "systolicBloodPressure": 100
        }),
    );
    assert_eq!(result.score, 2.0);
    assert_eq!(result.risk_category, "High Risk");
}

// --- Alvarado ---

#[test]
fn alvarado_rlq_pain_alone_scores_nothing() {
    let result = run(
        "alvarado",
        json!({
            "rlqPain": true,
            "anorexia": false,
            "nauseaVomiting": false,
            "rlqTenderness": false,
            "reboundTenderness": false,
            "elevatedTemperature": false,
            "leukocytosis": false,
            "leftShift": false,
            "migrationPain": false
        }),
    );
    assert_eq!(result.score, 0.0);
    assert_eq!(result.details.len(), 8);
}

#[test]
fn alvarado_all_findings_is_ten() {
    let result = run(
        "alvarado",
        json!({
            "rlqPain": true,
            "anorexia": true,
            "nauseaVomiting": true,
            "rlqTenderness": true,
            "reboundTenderness": true,
            "elevatedTemperature": true,
            "leukocytosis": true,
            "leftShift": true,
            "migrationPain": true
        }),
    );
    assert_eq!(result.score, 10.0);
    assert_eq!(result.risk_category, "Very High Risk");
}

// --- Glasgow-Blatchford ---

fn blatchford(sex: &str, hemoglobin: f64, bun: Option<f64>) -> ScoreResult {
    run(
        "glasgow_blatchford",
        json!({
            "bun": bun,
            "hemoglobin": hemoglobin,
            "systolicBloodPressure": 120,
            "pulse": 80,
            "melena": false,
            "syncope": false,
            "hepaticDisease": false,
            "cardiacFailure": false,
            "sex": sex
        }),
    )
}

#[test]
fn blatchford_hemoglobin_bands_differ_by_sex() {
    let male = blatchford("male", 11.0, None);
    let female = blatchford("female", 11.0, None);

    assert_eq!(male.score, 3.0);
    assert_eq!(male.risk_category, "Moderate Risk");
    assert_eq!(female.score, 1.0);
    assert_eq!(female.risk_category, "Low Risk");
}

#[test]
fn blatchford_male_between_twelve_and_thirteen() {
    assert_eq!(blatchford("male", 12.5, None).score, 1.0);
    assert_eq!(blatchford("female", 12.5, None).score, 0.0);
}

#[test]
fn blatchford_urea_in_mmol_is_converted() {
    // 25 mmol/L is 70 mg/dL BUN, the top band.
    let result = blatchford("male", 14.0, Some(25.0));
    assert_eq!(result.score, 6.0);
    assert_eq!(result.details.len(), 9);
}

#[test]
fn blatchford_missing_bun_contributes_zero() {
    let result = blatchford("female", 14.0, None);
    assert_eq!(result.score, 0.0);
    assert_eq!(result.risk_category, "Very Low Risk");
    assert!(result.details[0].contains("not provided"));
}

// --- NIHSS ---

fn nihss(motor: &str, dysarthria: &str) -> Value {
    json!({
        "levelOfConsciousness": "alert",
        "locQuestions": "both_correct",
        "locCommands": "both_correct",
        "bestGaze": "normal",
        "visual": "no_loss",
        "facialPalsy": "normal",
        "motorArmLeft": motor,
        "motorArmRight": "no_drift",
        "motorLegLeft": motor,
        "motorLegRight": "no_drift",
        "limbAtaxia": "absent",
        "sensory": "normal",
        "bestLanguage": "no_aphasia",
        "dysarthria": dysarthria,
        "extinctionInattention": "no_abnormality"
    })
}

#[test]
fn nihss_intact_patient() {
    let result = run("nihss", nihss("no_drift", "normal"));
    assert_eq!(result.score, 0.0);
    assert_eq!(result.risk_category, "No Stroke");
    assert_eq!(result.details.len(), 15);
}

#[test]
fn nihss_untestable_items_score_zero() {
    let result = run("nihss", nihss("amputation", "intubated"));
    assert_eq!(result.score, 0.0);
}

#[test]
fn nihss_weak_limbs() {
    let result = run("nihss", nihss("no_movement", "severe"));
    assert_eq!(result.score, 10.0);
    assert_eq!(result.risk_category, "Moderate Stroke");
    assert_eq!(result.details[6], "Motor Left Arm: no movement = 4");
}

// --- SOFA ---

fn sofa_inputs(pao2: Option<f64>, fio2: Option<f64>, ventilated: bool) -> Value {
    json!({
        "pao2": pao2,
        "fio2": fio2,
        "mechanicalVentilation": ventilated,
        "platelets": 200,
        "bilirubin": 0.8,
        "vasopressors": "none",
        "glasgowComaScale": 15,
        "creatinine": 0.9
    })
}

#[test]
fn sofa_renal_urine_output_dominates_creatinine() {
    let renal = sofa::renal_sub_score(1.5, Some(150.0));
    assert_eq!(renal.points, 4.0);

    let creatinine_only = sofa::renal_sub_score(1.5, None);
    assert_eq!(creatinine_only.points, 1.0);
}

#[test]
fn sofa_renal_ladder() {
    assert_eq!(sofa::renal_sub_score(5.0, None).points, 4.0);
    assert_eq!(sofa::renal_sub_score(1.0, Some(400.0)).points, 3.0);
    assert_eq!(sofa::renal_sub_score(3.5, Some(1000.0)).points, 3.0);
    assert_eq!(sofa::renal_sub_score(2.0, None).points, 2.0);
    assert_eq!(sofa::renal_sub_score(1.1, Some(1500.0)).points, 0.0);
}

#[test]
fn sofa_respiration_needs_both_gases() {
    let result = run("sofa", sofa_inputs(Some(80.0), None, false));
    assert_eq!(result.score, 0.0);
    assert!(result.details[0].contains("Unable to calculate"));
    assert_eq!(result.details.len(), 6);
}

#[test]
fn sofa_ventilation_raises_severe_respiratory_band() {
    // 80 / 0.5 = 160
    let ventilated = run("sofa", sofa_inputs(Some(80.0), Some(0.5), true));
    let unsupported = run("sofa", sofa_inputs(Some(80.0), Some(0.5), false));
    assert_eq!(ventilated.score, 3.0);
    assert_eq!(unsupported.score, 2.0);
}

#[test]
fn sofa_fio2_percentage_matches_fraction() {
    let fraction = run("sofa", sofa_inputs(Some(80.0), Some(0.5), true));
    let percent = run("sofa", sofa_inputs(Some(80.0), Some(50.0), true));
    assert_eq!(fraction, percent);
}

#[test]
fn sofa_vasopressors_outrank_map() {
    let cardio = sofa::cardiovascular_sub_score(sofa::Vasopressors::DopamineHighEpiNorepi, Some(60.0));
    assert_eq!(cardio.points, 4.0);

    let map_only = sofa::cardiovascular_sub_score(sofa::Vasopressors::NoVasopressors, Some(60.0));
    assert_eq!(map_only.points, 1.0);
}

#[test]
fn sofa_multi_organ_failure() {
    let result = run(
        "sofa",
        json!({
            "pao2": 60,
            "fio2": 1.0,
            "mechanicalVentilation": true,
            "platelets": 15,
            "bilirubin": 13,
            "vasopressors": "dopamine_high_epi_norepi",
            "glasgowComaScale": 3,
            "creatinine": 6,
            "urineOutput": 100
        }),
    );
    assert_eq!(result.score, 24.0);
    assert_eq!(result.risk_category, "Critical");
}

// --- PERC ---

#[test]
fn perc_all_negative_rules_out() {
    let result = run(
        "perc",
        json!({
            "age": 30,
            "heartRate": 80,
            "oxygenSaturation": 98,
            "unilateralLegSwelling": false,
            "hemoptysis": false,
            "recentSurgeryOrTrauma": false,
            "priorPEorDVT": false,
            "hormoneUse": false
        }),
    );
    assert_eq!(result.score, 0.0);
    assert_eq!(result.risk_category, "PE Ruled Out");
    assert_eq!(result.details.len(), 8);
}

#[test]
fn perc_thresholds() {
    let result = run(
        "perc",
        json!({
            "age": 50,
            "heartRate": 100,
            "oxygenSaturation": 95,
            "unilateralLegSwelling": false,
            "hemoptysis": false,
            "recentSurgeryOrTrauma": false,
            "priorPEorDVT": false,
            "hormoneUse": true
        }),
    );
    // SpO2 of exactly 95 is not hypoxic.
    assert_eq!(result.score, 3.0);
    assert_eq!(result.risk_category, "PERC Positive");
}

// --- TIMI ---

#[test]
fn timi_two_points_is_low_risk() {
    let result = run(
        "timi",
        json!({
            "age": 70,
            "riskFactors": 1,
            "knownCAD": false,
            "aspirinUse": true,
            "severeAngina": false,
            "stChanges": false,
            "elevatedCardiacMarkers": false
        }),
    );
    assert_eq!(result.score, 2.0);
    assert_eq!(result.risk_category, "Low Risk");
    assert!(result.interpretation.starts_with("8.3%"));
}

// --- MELD ---

#[test]
fn meld_normal_labs_clamp_to_six() {
    let result = run(
        "meld",
        json!({ "bilirubin": 1.0, "inr": 1.0, "creatinine": 1.0, "dialysis": false }),
    );
    assert_eq!(result.score, 6.0);
    assert_eq!(result.risk_category, "Low Risk");
    assert_eq!(result.details.len(), 5);
}

#[test]
fn meld_low_labs_are_raised_to_one() {
    let result = run(
        "meld",
        json!({ "bilirubin": 0.4, "inr": 0.9, "creatinine": 0.6, "dialysis": false }),
    );
    assert_eq!(result.score, 6.0);
    assert_eq!(result.details[0], "Bilirubin: 0.4 mg/dL (used: 1.0)");
    assert_eq!(result.details[1], "INR: 0.90 (used: 1.00)");
}

#[test]
fn meld_dialysis_sets_creatinine_to_four() {
    // 9.57 * ln(4) + 6.43 = 19.70, rounds to 20.
    let result = run(
        "meld",
        json!({ "bilirubin": 1.0, "inr": 1.0, "creatinine": 1.0, "dialysis": true }),
    );
    assert_eq!(result.score, 20.0);
    assert_eq!(result.risk_category, "High Risk");
    assert_eq!(result.details[2], "Creatinine: 1.0 mg/dL (used: 4.0)");
    assert_eq!(result.details[3], "Patient on dialysis: creatinine set to 4.0");
}

#[test]
fn meld_is_capped_at_forty() {
    let result = run(
        "meld",
        json!({ "bilirubin": 40.0, "inr": 10.0, "creatinine": 8.0, "dialysis": false }),
    );
    assert_eq!(result.score, 40.0);
    assert_eq!(result.risk_category, "Critical");
}

#[test]
fn meld_rounding() {
    assert_eq!(meld::round_score(6.43), 6.0);
    assert_eq!(meld::round_score(12.46), 13.0);
    assert_eq!(meld::round_score(12.44), 12.0);
    assert_eq!(meld::round_score(55.0), 40.0);
}

// --- GAD-7 ---

#[test]
fn gad7_maximum() {
    let answer = "nearly_every_day";
    let result = run(
        "gad7",
        json!({
            "nervous": answer,
            "stopWorrying": answer,
            "worryingTooMuch": answer,
            "troubleRelaxing": answer,
            "restless": answer,
            "easilyAnnoyed": answer,
            "feelingAfraid": answer
        }),
    );
    assert_eq!(result.score, 21.0);
    assert_eq!(result.risk_category, "Severe Anxiety");
    assert_eq!(
        result.details[0],
        "Feeling nervous, anxious, or on edge: nearly every day (+3)"
    );
}

#[test]
fn gad7_mild() {
    let result = run(
        "gad7",
        json!({
            "nervous": "several_days",
            "stopWorrying": "several_days",
            "worryingTooMuch": "more_than_half",
            "troubleRelaxing": "several_days",
            "restless": "not_at_all",
            "easilyAnnoyed": "not_at_all",
            "feelingAfraid": "not_at_all"
        }),
    );
    assert_eq!(result.score, 5.0);
    assert_eq!(result.risk_category, "Mild Anxiety");
}

// --- GRACE ---

#[test]
fn grace_range_lookup_is_inclusive_and_saturates() {
    assert_eq!(grace::points_for(39.0, &grace::AGE_POINTS), 0.0);
    assert_eq!(grace::points_for(39.5, &grace::AGE_POINTS), 18.0);
    assert_eq!(grace::points_for(600.0, &grace::HEART_RATE_POINTS), 46.0);
    assert_eq!(grace::points_for(0.2, &grace::CREATININE_POINTS), 2.0);
    assert_eq!(grace::points_for(80.0, &grace::SYSTOLIC_POINTS), 43.0);
}

#[test]
fn grace_intermediate_presentation() {
    // 73 + 7 + 24 + 8 + 0
    let result = run(
        "grace",
        json!({
            "age": 70,
            "heartRate": 80,
            "systolicBloodPressure": 130,
            "creatinine": 1.0,
            "killipClass": 1,
            "cardiacArrest": false,
            "stDeviation": false,
            "elevatedCardiacMarkers": false
        }),
    );
    assert_eq!(result.score, 112.0);
    assert_eq!(result.risk_category, "Intermediate Risk");
    assert_eq!(result.details.len(), 8);
    assert_eq!(result.details[3], "Creatinine 1.00 mg/dL: +8");
}

#[test]
fn grace_killip_and_events() {
    let result = run(
        "grace",
        json!({
            "age": 30,
            "heartRate": 60,
            "systolicBloodPressure": 210,
            "creatinine": 0.3,
            "killipClass": 4,
            "cardiacArrest": true,
            "stDeviation": true,
            "elevatedCardiacMarkers": true
        }),
    );
    // 0 + 0 + 0 + 2 + 64 + 43 + 30 + 15
    assert_eq!(result.score, 154.0);
    assert_eq!(result.risk_category, "High Risk");
}

// --- HAS-BLED ---

#[test]
fn has_bled_three_is_high_risk() {
    let result = run(
        "has_bled",
        json!({
            "hypertension": true,
            "abnormalRenalFunction": false,
            "abnormalLiverFunction": false,
            "stroke": false,
            "bleedingHistory": false,
            "labileINR": true,
            "age": 70,
            "medications": false,
            "alcoholUse": false
        }),
    );
    assert_eq!(result.score, 3.0);
    assert_eq!(result.risk_category, "High Risk");
    assert!(result.interpretation.contains("5.8-6.0%"));
    assert_eq!(result.details.len(), 9);
}

// --- ABCD2 ---

#[test]
fn abcd2_maximum() {
    let result = run(
        "abcd2",
        json!({
            "age": 65,
            "bloodPressure": { "systolic": 150, "diastolic": 85 },
            "clinicalFeatures": "unilateral_weakness",
            "duration": "60_or_more",
            "diabetes": true
        }),
    );
    assert_eq!(result.score, 7.0);
    assert_eq!(result.risk_category, "High Risk");
}

#[test]
fn abcd2_short_speech_only_episode() {
    let result = run(
        "abcd2",
        json!({
            "age": 55,
            "bloodPressure": { "systolic": 130, "diastolic": 80 },
            "clinicalFeatures": "speech_impairment",
            "duration": "10_to_59",
            "diabetes": false
        }),
    );
    assert_eq!(result.score, 2.0);
    assert_eq!(result.risk_category, "Low Risk");
    assert_eq!(result.details[3], "Duration (10 to 59 minutes): +1");
}

#[test]
fn results_serialize_with_camel_case_keys() {
    let result = run(
        "qsofa",
        json!({
            "respiratoryRate": 18,
            "alteredMentalStatus": false,
            "systolicBloodPressure": 120
        }),
    );
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["maxScore"], json!(3.0));
    assert_eq!(value["riskCategory"], json!("Low Risk"));
    assert!(value["details"].is_array());
    assert_eq!(CalculatorId::Qsofa.max_score(), result.max_score);
}
