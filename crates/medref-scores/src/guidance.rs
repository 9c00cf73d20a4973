//! Risk bands and clinical guidance for every calculator.
//!
//! Each calculator owns one [`GuidanceTable`]: bands ordered by their
//! exclusive upper bound, followed by a catch-all for the highest band.
//! Tables are `'static` and never change after compilation.

use crate::calculator::CalculatorId;
use crate::scoring::Sex;

/// Extra facts some tables need beyond the score itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GuidanceContext {
    pub sex: Option<Sex>,
}

impl GuidanceContext {
    pub fn with_sex(sex: Sex) -> Self {
        Self { sex: Some(sex) }
    }
}

pub type GuidanceFn = fn(f64, &GuidanceContext) -> String;

/// Guidance text that is either constant or derived from the score.
#[derive(Clone, Copy)]
pub enum GuidanceText {
    Fixed(&'static str),
    Computed(GuidanceFn),
}

impl GuidanceText {
    pub fn render(&self, score: f64, context: &GuidanceContext) -> String {
        match self {
            GuidanceText::Fixed(text) => (*text).to_string(),
            GuidanceText::Computed(f) => f(score, context),
        }
    }

    pub fn as_fixed(&self) -> Option<&'static str> {
        match self {
            GuidanceText::Fixed(text) => Some(*text),
            GuidanceText::Computed(_) => None,
        }
    }
}

impl std::fmt::Debug for GuidanceText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GuidanceText::Fixed(text) => f.debug_tuple("Fixed").field(text).finish(),
            GuidanceText::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GuidanceEntry {
    pub risk_category: &'static str,
    pub interpretation: GuidanceText,
    pub recommendation: GuidanceText,
}

#[derive(Debug, Clone, Copy)]
pub struct GuidanceBand {
    /// Exclusive upper bound: scores strictly below this fall in the band.
    pub below: f64,
    pub entry: GuidanceEntry,
}

#[derive(Debug)]
pub struct GuidanceTable {
    pub bands: &'static [GuidanceBand],
    pub catch_all: GuidanceEntry,
}

impl GuidanceTable {
    /// All entries, lowest band first, catch-all last.
    pub fn entries(&self) -> impl Iterator<Item = &GuidanceEntry> {
        self.bands
            .iter()
            .map(|band| &band.entry)
            .chain(std::iter::once(&self.catch_all))
    }

    /// Position of the band `score` falls in; the catch-all is
    /// `bands.len()`.
    pub fn band_index(&self, score: f64) -> usize {
        self.bands
            .iter()
            .position(|band| score < band.below)
            .unwrap_or(self.bands.len())
    }

    pub fn entry_for(&self, score: f64) -> &GuidanceEntry {
        self.bands
            .iter()
            .find(|band| score < band.below)
            .map(|band| &band.entry)
            .unwrap_or(&self.catch_all)
    }
}

/// Guidance resolved for a specific score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guidance {
    pub risk_category: String,
    pub interpretation: String,
    pub recommendation: String,
}

pub fn resolve_guidance(
    calculator: CalculatorId,
    score: f64,
    context: &GuidanceContext,
) -> Guidance {
    let entry = guidance_table(calculator).entry_for(score);
    Guidance {
        risk_category: entry.risk_category.to_string(),
        interpretation: entry.interpretation.render(score, context),
        recommendation: entry.recommendation.render(score, context),
    }
}

pub fn guidance_table(calculator: CalculatorId) -> &'static GuidanceTable {
    match calculator {
        CalculatorId::Curb65 => &CURB65,
        CalculatorId::Centor => &CENTOR,
        CalculatorId::WellsDvt => &WELLS_DVT,
        CalculatorId::WellsPe => &WELLS_PE,
        CalculatorId::Heart => &HEART,
        CalculatorId::Cha2ds2Vasc => &CHA2DS2_VASC,
        CalculatorId::Gcs => &GCS,
        CalculatorId::Qsofa => &QSOFA,
        CalculatorId::Alvarado => &ALVARADO,
        CalculatorId::GlasgowBlatchford => &GLASGOW_BLATCHFORD,
        CalculatorId::Nihss => &NIHSS,
        CalculatorId::Sofa => &SOFA,
        CalculatorId::Perc => &PERC,
        CalculatorId::Timi => &TIMI,
        CalculatorId::Meld => &MELD,
        CalculatorId::Gad7 => &GAD7,
        CalculatorId::Grace => &GRACE,
        CalculatorId::HasBled => &HAS_BLED,
        CalculatorId::Abcd2 => &ABCD2,
    }
}

const fn band(
    below: f64,
    risk_category: &'static str,
    interpretation: GuidanceText,
    recommendation: GuidanceText,
) -> GuidanceBand {
    GuidanceBand {
        below,
        entry: entry(risk_category, interpretation, recommendation),
    }
}

const fn entry(
    risk_category: &'static str,
    interpretation: GuidanceText,
    recommendation: GuidanceText,
) -> GuidanceEntry {
    GuidanceEntry {
        risk_category,
        interpretation,
        recommendation,
    }
}

use GuidanceText::{Computed, Fixed};

// ---------------------------------------------------------------------------
// CURB-65

static CURB65: GuidanceTable = GuidanceTable {
    bands: &[
        band(
            2.0,
            "Low Risk",
            Fixed("Low risk of mortality (1.5% for score 0, 3.2% for score 1)"),
            Fixed(
                "Consider outpatient treatment. Patients can typically be managed at home with oral antibiotics if pneumonia is confirmed.",
            ),
        ),
        band(
            3.0,
            "Moderate Risk",
            Fixed("Moderate risk of mortality (13%)"),
            Fixed(
                "Consider hospital admission or close outpatient monitoring. Short inpatient observation may be appropriate.",
            ),
        ),
    ],
    catch_all: entry(
        "High Risk",
        Computed(curb65_high_interpretation),
        Fixed(
            "Hospital admission recommended. Consider ICU admission for scores 4-5, especially with additional risk factors.",
        ),
    ),
};

fn curb65_high_interpretation(score: f64, _: &GuidanceContext) -> String {
    let mortality = if score < 4.0 {
        "17%"
    } else if score < 5.0 {
        "41.5%"
    } else {
        "57%"
    };
    format!("High risk of mortality ({mortality})")
}

// ---------------------------------------------------------------------------
// Centor

static CENTOR: GuidanceTable = GuidanceTable {
    bands: &[
        band(
            2.0,
            "Very Low Risk",
            Computed(centor_very_low_interpretation),
            Fixed(
                "No testing or antibiotics needed. Symptomatic treatment is appropriate. Streptococcal infection is unlikely.",
            ),
        ),
        band(
            4.0,
            "Moderate Risk",
            Computed(centor_moderate_interpretation),
            Fixed(
                "Rapid antigen detection test (RADT) or throat culture recommended. Treat with antibiotics if test is positive.",
            ),
        ),
    ],
    catch_all: entry(
        "High Risk",
        Fixed("51-53% probability of streptococcal pharyngitis"),
        Fixed(
            "Consider empiric antibiotic treatment or perform rapid antigen detection test. High likelihood of streptococcal infection.",
        ),
    ),
};

fn centor_very_low_interpretation(score: f64, _: &GuidanceContext) -> String {
    let probability = if score <= 0.0 { "1-2.5%" } else { "5-10%" };
    format!("{probability} probability of streptococcal pharyngitis")
}

fn centor_moderate_interpretation(score: f64, _: &GuidanceContext) -> String {
    let probability = if score < 3.0 { "11-17%" } else { "28-35%" };
    format!("{probability} probability of streptococcal pharyngitis")
}

// ---------------------------------------------------------------------------
// Wells DVT / Wells PE

static WELLS_DVT: GuidanceTable = GuidanceTable {
    bands: &[
        band(
            1.0,
            "Low Probability",
            Fixed("Low probability of DVT (~5%)"),
            Fixed(
                "D-dimer testing recommended. If D-dimer is negative, DVT is effectively ruled out. If positive, proceed to ultrasound imaging.",
            ),
        ),
        band(
            3.0,
            "Moderate Probability",
            Fixed("Moderate probability of DVT (~17%)"),
            Fixed(
                "D-dimer testing recommended. If negative, DVT unlikely. If positive, compression ultrasound is indicated.",
            ),
        ),
    ],
    catch_all: entry(
        "High Probability",
        Fixed("High probability of DVT (~53%)"),
        Fixed(
            "Compression ultrasound imaging strongly recommended. Consider empiric anticoagulation while awaiting imaging if no contraindications.",
        ),
    ),
};

static WELLS_PE: GuidanceTable = GuidanceTable {
    bands: &[
        band(
            2.0,
            "Low Probability",
            Fixed("Low probability of PE (~2%)"),
            Fixed(
                "D-dimer testing recommended. If D-dimer is negative, PE is effectively ruled out. If positive, proceed to CT pulmonary angiography (CTPA).",
            ),
        ),
        band(
            7.0,
            "Moderate Probability",
            Fixed("Moderate probability of PE (~20-30%)"),
            Fixed(
                "D-dimer or CTPA recommended depending on clinical judgment. If D-dimer positive or not performed, CTPA is indicated.",
            ),
        ),
    ],
    catch_all: entry(
        "High Probability",
        Fixed("High probability of PE (~65%)"),
        Fixed(
            "CT pulmonary angiography (CTPA) strongly recommended. Consider empiric anticoagulation if no contraindications while awaiting imaging.",
        ),
    ),
};

// ---------------------------------------------------------------------------
// HEART

static HEART: GuidanceTable = GuidanceTable {
    bands: &[
        band(
            4.0,
            "Low Risk",
            Fixed("Low risk of major adverse cardiac events (MACE) at 6 weeks: 0.9-1.7%"),
            Fixed(
                "Early discharge with outpatient follow-up is appropriate. No further cardiac workup needed unless clinically indicated. Consider non-cardiac causes of chest pain.",
            ),
        ),
        band(
            7.0,
            "Moderate Risk",
            Fixed("Moderate risk of MACE at 6 weeks: 12-17%"),
            Fixed(
                "Observation with serial troponins and ECGs recommended. Stress testing or coronary CT angiography may be appropriate. Cardiology consultation should be considered.",
            ),
        ),
    ],
    catch_all: entry(
        "High Risk",
        Fixed("High risk of MACE at 6 weeks: 50-65%"),
        Fixed(
            "Urgent cardiology consultation recommended. Early invasive strategy with coronary angiography should be strongly considered. Admit for continuous monitoring and treatment.",
        ),
    ),
};

// ---------------------------------------------------------------------------
// CHA2DS2-VASc

static CHA2DS2_VASC: GuidanceTable = GuidanceTable {
    bands: &[
        band(
            1.0,
            "Very Low Risk",
            Fixed("Very low stroke risk (0-0.2% per year)"),
            Fixed(
                "No antithrombotic therapy recommended. Annual reassessment of stroke risk factors is advised.",
            ),
        ),
        band(
            2.0,
            "Low Risk",
            Fixed("Low stroke risk (0.6-1.3% per year)"),
            Computed(cha2ds2_vasc_low_recommendation),
        ),
        band(
            3.0,
            "Low-Moderate Risk",
            Fixed("Low-moderate stroke risk (2.2% per year)"),
            Fixed(
                "Oral anticoagulation recommended (direct oral anticoagulant or warfarin). Assess bleeding risk using HAS-BLED score. Benefits typically outweigh risks.",
            ),
        ),
        band(
            5.0,
            "Moderate Risk",
            Computed(cha2ds2_vasc_moderate_interpretation),
            Fixed(
                "Oral anticoagulation strongly recommended unless contraindicated. Direct oral anticoagulants (DOACs) are generally preferred over warfarin. Assess bleeding risk using HAS-BLED score.",
            ),
        ),
        band(
            7.0,
            "Moderate-High Risk",
            Computed(cha2ds2_vasc_moderate_high_interpretation),
            Fixed(
                "Oral anticoagulation strongly recommended. DOACs preferred over warfarin in most cases. Careful monitoring and bleeding risk assessment essential.",
            ),
        ),
    ],
    catch_all: entry(
        "High Risk",
        Fixed("High stroke risk (>10% per year)"),
        Fixed(
            "Oral anticoagulation essential unless absolute contraindication exists. DOACs preferred. Consider specialist referral for anticoagulation management and close monitoring.",
        ),
    ),
};

/// Female sex is itself worth one point, so a female scoring 1 has no
/// other risk factor.
fn cha2ds2_vasc_low_recommendation(_: f64, context: &GuidanceContext) -> String {
    if context.sex == Some(Sex::Female) {
        "For females with score of 1 (sex alone), no anticoagulation needed. For males with score of 1, consider oral anticoagulation or aspirin based on patient preferences and bleeding risk.".to_string()
    } else {
        "Consider oral anticoagulation or aspirin. Discuss risks and benefits with patient. Assess bleeding risk using HAS-BLED score.".to_string()
    }
}

fn cha2ds2_vasc_moderate_interpretation(score: f64, _: &GuidanceContext) -> String {
    let rate = if score < 4.0 { "3.2%" } else { "4.8%" };
    format!("Moderate stroke risk ({rate} per year)")
}

fn cha2ds2_vasc_moderate_high_interpretation(score: f64, _: &GuidanceContext) -> String {
    let rate = if score < 6.0 { "6.7%" } else { "10%" };
    format!("Moderate-high stroke risk ({rate} per year)")
}

// ---------------------------------------------------------------------------
// GCS (lower is worse)

static GCS: GuidanceTable = GuidanceTable {
    bands: &[
        band(
            9.0,
            "Severe",
            Computed(gcs_severe_interpretation),
            Fixed(
                "Severe head injury. Immediate ICU admission required. Definitive airway management (intubation) strongly recommended for GCS ≤8. Emergency CT imaging and neurosurgical consultation essential. Consider ICP monitoring.",
            ),
        ),
        band(
            13.0,
            "Moderate",
            Fixed(
                "Moderate impairment (GCS 9-12). Significant neurological dysfunction present.",
            ),
            Fixed(
                "Moderate head injury. Requires hospital admission and close monitoring. CT imaging indicated. Consider neurosurgical consultation. May require ICU admission for frequent neurological assessments.",
            ),
        ),
    ],
    catch_all: entry(
        "Mild",
        Fixed(
            "Mild impairment (GCS 13-15). Patient is likely to have good neurological function.",
        ),
        Fixed(
            "Mild head injury. Observe for deterioration. Most patients with GCS 13-15 can be managed with observation. Consider CT if mechanism concerning or other high-risk features present.",
        ),
    ),
};

fn gcs_severe_interpretation(score: f64, _: &GuidanceContext) -> String {
    let base = "Severe impairment (GCS 3-8). Critical neurological dysfunction.";
    if score <= 3.0 {
        format!("{base} GCS 3 is the lowest possible score indicating deep coma.")
    } else {
        base.to_string()
    }
}

// ---------------------------------------------------------------------------
// qSOFA

static QSOFA: GuidanceTable = GuidanceTable {
    bands: &[band(
        2.0,
        "Low Risk",
        Fixed("Low risk of sepsis-related mortality and poor outcomes"),
        Fixed(
            "qSOFA <2 does not rule out infection or sepsis. Continue clinical assessment. If infection suspected, consider full SOFA score and lactate measurement. Monitor closely for deterioration.",
        ),
    )],
    catch_all: entry(
        "High Risk",
        Fixed(
            "High risk of sepsis-related mortality (in-hospital mortality ~10% for qSOFA ≥2 vs ~1% for qSOFA <2)",
        ),
        Fixed(
            "qSOFA ≥2 suggests sepsis with organ dysfunction. URGENT: Obtain lactate, blood cultures, and complete blood count. Calculate full SOFA score. Initiate sepsis bundle immediately: IV fluids, broad-spectrum antibiotics within 1 hour, and consider ICU admission. Reassess frequently.",
        ),
    ),
};

// ---------------------------------------------------------------------------
// Alvarado

static ALVARADO: GuidanceTable = GuidanceTable {
    bands: &[
        band(
            5.0,
            "Low Risk",
            Fixed("Low probability of acute appendicitis (5-20% likelihood)"),
            Fixed(
                "Appendicitis unlikely. Consider alternative diagnoses. Outpatient management with close follow-up is appropriate. Discharge with return precautions. Re-evaluate if symptoms worsen or persist beyond 24-48 hours.",
            ),
        ),
        band(
            7.0,
            "Intermediate Risk",
            Fixed("Moderate probability of acute appendicitis (30-65% likelihood)"),
            Fixed(
                "Appendicitis possible. Further evaluation recommended with CT scan or ultrasound imaging. Active observation with serial abdominal exams. Consider surgical consultation. Admission for observation may be appropriate if imaging unavailable or equivocal.",
            ),
        ),
        band(
            9.0,
            "High Risk",
            Fixed("High probability of acute appendicitis (65-85% likelihood)"),
            Fixed(
                "Surgical consultation strongly recommended. CT scan or ultrasound can help confirm diagnosis and assess for complications (perforation, abscess). May proceed to surgery based on clinical judgment. NPO (nothing by mouth) and IV hydration. Consider antibiotics.",
            ),
        ),
    ],
    catch_all: entry(
        "Very High Risk",
        Fixed("Very high probability of acute appendicitis (>85% likelihood)"),
        Fixed(
            "Urgent surgical consultation required. Imaging (CT/ultrasound) recommended but should not significantly delay surgery if patient is clinically unstable. NPO, IV fluids, analgesia, and preoperative antibiotics. Appendectomy is indicated.",
        ),
    ),
};

// ---------------------------------------------------------------------------
// Glasgow-Blatchford

static GLASGOW_BLATCHFORD: GuidanceTable = GuidanceTable {
    bands: &[
        band(
            1.0,
            "Very Low Risk",
            Fixed(
                "Very low risk of requiring intervention. Risk of rebleeding, intervention, or mortality is <1%.",
            ),
            Fixed(
                "Patient may be considered for early discharge and outpatient management. No endoscopy required urgently. Ensure adequate follow-up arranged. GBS of 0 has high negative predictive value for needing intervention.",
            ),
        ),
        band(
            2.0,
            "Low Risk",
            Fixed(
                "Low risk of requiring intervention. Still consider for potential outpatient management with close follow-up.",
            ),
            Fixed(
                "Consider early discharge with outpatient gastroenterology follow-up if clinically stable and no other concerning features. Some patients may benefit from brief observation period.",
            ),
        ),
        band(
            6.0,
            "Moderate Risk",
            Fixed("Moderate risk of requiring intervention (transfusion, endoscopy, surgery)."),
            Fixed(
                "Hospital admission recommended. Arrange upper endoscopy within 24 hours. Type and crossmatch blood. Consider proton pump inhibitor (PPI) infusion. Monitor hemoglobin serially. Gastroenterology consultation advised.",
            ),
        ),
        band(
            12.0,
            "High Risk",
            Fixed(
                "High risk of requiring urgent intervention. Significant likelihood of need for transfusion, endoscopic or surgical intervention.",
            ),
            Fixed(
                "Hospital admission required. Urgent upper endoscopy (within 12-24 hours). IV PPI infusion. Aggressive fluid resuscitation. Type and crossmatch 2-4 units PRBCs. Urgent gastroenterology consultation. Consider ICU admission for close monitoring. NPO status.",
            ),
        ),
    ],
    catch_all: entry(
        "Very High Risk",
        Fixed(
            "Very high risk of mortality and need for urgent intervention. Critical upper GI bleeding.",
        ),
        Fixed(
            "URGENT: ICU admission. Immediate gastroenterology consultation for urgent upper endoscopy. Large-bore IV access. Aggressive resuscitation with crystalloids and blood products. Transfuse to maintain Hgb >7 g/dL (>8 in cardiovascular disease). High-dose IV PPI. Consider intubation for airway protection if massive hematemesis or altered mental status. Surgery backup may be needed.",
        ),
    ),
};

// ---------------------------------------------------------------------------
// NIHSS

static NIHSS: GuidanceTable = GuidanceTable {
    bands: &[
        band(
            1.0,
            "No Stroke",
            Fixed("No stroke symptoms detected. Patient appears neurologically intact."),
            Fixed(
                "No acute stroke treatment indicated based on NIHSS alone. Consider other causes of symptoms if clinically suspected stroke. Document baseline NIHSS for future reference.",
            ),
        ),
        band(
            5.0,
            "Minor Stroke",
            Fixed("Minor stroke (NIHSS 1-4). Small neurological deficit present."),
            Fixed(
                "Consider thrombolytic therapy if within time window and no contraindications (though benefit may be modest for very low scores). Admit to stroke unit. Imaging (CT/MRI) to rule out hemorrhage and confirm ischemia. May be candidate for IV tPA or mechanical thrombectomy based on imaging. Aspirin if not receiving tPA.",
            ),
        ),
        band(
            16.0,
            "Moderate Stroke",
            Fixed("Moderate stroke (NIHSS 5-15). Significant neurological deficit."),
            Fixed(
                "URGENT: Candidate for thrombolytic therapy (IV tPA) if within 4.5 hours and no contraindications. Consider mechanical thrombectomy if large vessel occlusion and within time window (up to 24 hours for select patients). Immediate CT/MRI to exclude hemorrhage. Neurology and/or stroke team consultation. Admit to stroke unit or ICU. Close monitoring for neurological deterioration.",
            ),
        ),
        band(
            21.0,
            "Moderate-Severe Stroke",
            Fixed(
                "Moderate to severe stroke (NIHSS 16-20). Major neurological impairment.",
            ),
            Fixed(
                "URGENT: High priority for mechanical thrombectomy if large vessel occlusion identified on CT angiography (CTA). IV tPA if eligible and within time window. Immediate neurology/stroke team consultation. ICU admission for close monitoring. High risk for hemorrhagic transformation and cerebral edema. Consider intubation if airway compromise or GCS <8. Neurosurgical consultation may be needed.",
            ),
        ),
    ],
    catch_all: entry(
        "Severe Stroke",
        Fixed(
            "Severe stroke (NIHSS ≥21). Profound neurological deficit. High mortality risk.",
        ),
        Fixed(
            "CRITICAL: Emergent mechanical thrombectomy evaluation if large vessel occlusion present. May still benefit from IV tPA if eligible. ICU admission required. Likely need for airway protection/intubation. Risk of malignant cerebral edema is very high - neurosurgical consultation for possible decompressive hemicraniectomy. ICP monitoring may be indicated. Discuss goals of care with family. Multidisciplinary stroke team activation essential.",
        ),
    ),
};

// ---------------------------------------------------------------------------
// SOFA

static SOFA: GuidanceTable = GuidanceTable {
    bands: &[
        band(
            7.0,
            "Low Risk",
            Computed(sofa_low_interpretation),
            Fixed(
                "Continue supportive care and monitoring. Reassess SOFA every 24-48 hours or with any clinical change; a rise of 2 or more points from baseline indicates new organ dysfunction.",
            ),
        ),
        band(
            10.0,
            "Moderate Risk",
            Fixed("Moderate organ dysfunction. Predicted ICU mortality 15-20%."),
            Fixed(
                "ICU-level care recommended. Identify and treat the underlying cause (source control, antimicrobials if infection suspected). Organ-specific support as needed. Trend SOFA daily; a rising score predicts worse outcome.",
            ),
        ),
        band(
            13.0,
            "High Risk",
            Fixed("Severe organ dysfunction. Predicted ICU mortality 40-50%."),
            Fixed(
                "ICU admission required. Aggressive organ support (vasopressors, ventilation, renal replacement therapy as indicated). Early involvement of critical care specialists. Discuss prognosis and goals of care with family.",
            ),
        ),
        band(
            15.0,
            "Very High Risk",
            Fixed("Very severe multi-organ dysfunction. Predicted ICU mortality 50-60%."),
            Fixed(
                "Maximal ICU support. Reassess treatment response frequently. Early goals-of-care discussion with family is strongly advised. Consider palliative care consultation alongside active treatment.",
            ),
        ),
    ],
    catch_all: entry(
        "Critical",
        Fixed("Critical multi-organ failure. Predicted ICU mortality >80%."),
        Fixed(
            "Maximal organ support if consistent with patient goals. Urgent goals-of-care discussion with family. Palliative care consultation recommended. Document shared decision-making.",
        ),
    ),
};

fn sofa_low_interpretation(score: f64, _: &GuidanceContext) -> String {
    if score < 2.0 {
        "Minimal organ dysfunction. Predicted ICU mortality <10%.".to_string()
    } else {
        "Mild organ dysfunction. Predicted ICU mortality <10%. A SOFA score ≥2 with suspected infection meets Sepsis-3 criteria.".to_string()
    }
}

// ---------------------------------------------------------------------------
// PERC (0 means ruled out, not merely low)

static PERC: GuidanceTable = GuidanceTable {
    bands: &[band(
        1.0,
        "PE Ruled Out",
        Fixed(
            "PERC negative: all 8 criteria absent. In a patient with low clinical pretest probability (<15%), PE can be ruled out without further testing (missed PE rate <2%).",
        ),
        Fixed(
            "No D-dimer or imaging required for PE if clinical gestalt is low risk. PERC only applies to patients already judged low pretest probability; it does not rule out PE in moderate or high risk patients.",
        ),
    )],
    catch_all: entry(
        "PERC Positive",
        Computed(perc_positive_interpretation),
        Fixed(
            "Proceed with further testing: D-dimer if pretest probability is low or moderate, or apply Wells criteria to decide on CT pulmonary angiography.",
        ),
    ),
};

fn perc_positive_interpretation(score: f64, _: &GuidanceContext) -> String {
    let noun = if score == 1.0 { "criterion" } else { "criteria" };
    format!("PERC positive: {score} {noun} present. PE cannot be ruled out by PERC.")
}

// ---------------------------------------------------------------------------
// TIMI

static TIMI: GuidanceTable = GuidanceTable {
    bands: &[
        band(
            3.0,
            "Low Risk",
            Computed(timi_interpretation),
            Fixed(
                "Conservative management may be appropriate. Serial ECGs and troponins, antiplatelet therapy, and risk factor optimization. Consider non-invasive stress testing before discharge.",
            ),
        ),
        band(
            5.0,
            "Intermediate Risk",
            Computed(timi_interpretation),
            Fixed(
                "Admit for monitoring. Antiplatelet and anticoagulant therapy per ACS guidelines. Early invasive strategy (angiography within 24-72 hours) should be considered. Cardiology consultation recommended.",
            ),
        ),
    ],
    catch_all: entry(
        "High Risk",
        Computed(timi_interpretation),
        Fixed(
            "Early invasive strategy recommended (coronary angiography within 24 hours). Dual antiplatelet therapy and anticoagulation per ACS guidelines. Urgent cardiology consultation. Continuous cardiac monitoring.",
        ),
    ),
};

fn timi_interpretation(score: f64, _: &GuidanceContext) -> String {
    let rate = if score < 2.0 {
        "4.7%"
    } else if score < 3.0 {
        "8.3%"
    } else if score < 4.0 {
        "13.2%"
    } else if score < 5.0 {
        "19.9%"
    } else if score < 6.0 {
        "26.2%"
    } else {
        "40.9%"
    };
    format!(
        "{rate} risk of all-cause mortality, new or recurrent MI, or severe recurrent ischemia requiring urgent revascularization at 14 days"
    )
}

// ---------------------------------------------------------------------------
// MELD

static MELD: GuidanceTable = GuidanceTable {
    bands: &[
        band(
            10.0,
            "Low Risk",
            Fixed("Estimated 3-month mortality 1.9%"),
            Fixed(
                "Outpatient management with hepatology follow-up. Treat underlying liver disease and monitor MELD periodically. Transplant evaluation generally not yet indicated.",
            ),
        ),
        band(
            20.0,
            "Moderate Risk",
            Fixed("Estimated 3-month mortality 6.0%"),
            Fixed(
                "Hepatology referral recommended. Consider liver transplant evaluation (MELD ≥15 is a common referral threshold). Monitor closely for decompensation.",
            ),
        ),
        band(
            30.0,
            "High Risk",
            Fixed("Estimated 3-month mortality 19.6%"),
            Fixed(
                "Liver transplant evaluation strongly recommended. Frequent monitoring and management of complications (ascites, encephalopathy, variceal bleeding). Consider hospital admission for decompensation.",
            ),
        ),
        band(
            40.0,
            "Very High Risk",
            Fixed("Estimated 3-month mortality 52.6%"),
            Fixed(
                "Urgent transplant center referral. Inpatient management is usually required. High priority on the transplant waiting list. Discuss goals of care.",
            ),
        ),
    ],
    catch_all: entry(
        "Critical",
        Fixed("Estimated 3-month mortality 71.3%"),
        Fixed(
            "Critical liver failure. Highest transplant priority; ICU-level care. Urgent goals-of-care discussion if transplant is not an option.",
        ),
    ),
};

// ---------------------------------------------------------------------------
// GAD-7

static GAD7: GuidanceTable = GuidanceTable {
    bands: &[
        band(
            5.0,
            "Minimal Anxiety",
            Fixed(
                "Minimal or no anxiety symptoms. Score suggests no significant anxiety disorder present.",
            ),
            Fixed(
                "No treatment indicated based on GAD-7 alone. Reassurance and routine follow-up appropriate. Consider rescreening if symptoms develop or worsen.",
            ),
        ),
        band(
            10.0,
            "Mild Anxiety",
            Fixed("Mild anxiety symptoms present. May indicate emerging anxiety disorder."),
            Fixed(
                "Watchful waiting with follow-up in 2-4 weeks. Consider psychoeducation about anxiety management, relaxation techniques, and stress reduction strategies. Rescreening recommended. If symptoms persist or worsen, consider treatment options. Rule out medical causes (thyroid, cardiac, medication side effects).",
            ),
        ),
        band(
            15.0,
            "Moderate Anxiety",
            Fixed(
                "Moderate anxiety symptoms. Likely meets criteria for generalized anxiety disorder (GAD) or other anxiety disorder.",
            ),
            Fixed(
                "Treatment recommended. Options include: cognitive behavioral therapy (CBT) as first-line, or combination of CBT with medication (SSRIs/SNRIs). Screen for comorbid depression using PHQ-9. Assess for substance use. Consider referral to mental health professional. Monitor response to treatment with repeat GAD-7 in 4-8 weeks.",
            ),
        ),
    ],
    catch_all: entry(
        "Severe Anxiety",
        Fixed("Severe anxiety symptoms. Significant functional impairment likely present."),
        Fixed(
            "Prompt treatment essential. Combination therapy (medication + psychotherapy) typically most effective. Consider SSRIs (first-line: sertraline, escitalopram) or SNRIs (venlafaxine, duloxetine). Refer to psychiatry or mental health professional. Screen for suicide risk, comorbid depression, and substance use. Short-term benzodiazepines may be considered for acute symptom relief while starting SSRI/SNRI (which takes 2-4 weeks to take effect), but avoid long-term use due to dependence risk. Close follow-up required.",
        ),
    ),
};

// ---------------------------------------------------------------------------
// GRACE (in-hospital mortality)

static GRACE: GuidanceTable = GuidanceTable {
    bands: &[
        band(
            109.0,
            "Low Risk",
            Fixed("Low risk of in-hospital mortality (<1%)"),
            Fixed(
                "Non-invasive evaluation may be appropriate. Optimal medical therapy per ACS guidelines. Consider selective invasive strategy guided by stress testing.",
            ),
        ),
        band(
            141.0,
            "Intermediate Risk",
            Fixed("Intermediate risk of in-hospital mortality (1-3%)"),
            Fixed(
                "Early invasive strategy (angiography within 72 hours) recommended. Dual antiplatelet therapy and anticoagulation per ACS guidelines. Cardiology consultation.",
            ),
        ),
    ],
    catch_all: entry(
        "High Risk",
        Fixed("High risk of in-hospital mortality (>3%)"),
        Fixed(
            "Early invasive strategy within 24 hours recommended. Admit to coronary care unit with continuous monitoring. Urgent cardiology consultation.",
        ),
    ),
};

// ---------------------------------------------------------------------------
// HAS-BLED

static HAS_BLED: GuidanceTable = GuidanceTable {
    bands: &[
        band(
            1.0,
            "Low Risk",
            Fixed("Low risk of major bleeding on anticoagulation (0.9-1.2% per year)"),
            Fixed(
                "Anticoagulation is relatively safe. Benefits of stroke prevention typically outweigh bleeding risk for patients with appropriate CHA2DS2-VASc scores. Continue or initiate anticoagulation as indicated. Standard monitoring and follow-up appropriate. Patient education about bleeding signs and fall prevention.",
            ),
        ),
        band(
            2.0,
            "Low-Moderate Risk",
            Fixed("Low-moderate risk of major bleeding (1.9-2.0% per year)"),
            Fixed(
                "Anticoagulation generally still appropriate if indicated by CHA2DS2-VASc score. Benefits usually outweigh risks. Address modifiable risk factors: optimize blood pressure control, avoid NSAIDs and unnecessary antiplatelet agents, counsel on alcohol reduction if applicable. Ensure stable INR monitoring if on warfarin (or consider switching to DOAC). Regular follow-up every 3-6 months.",
            ),
        ),
        band(
            3.0,
            "Moderate Risk",
            Fixed("Moderate risk of major bleeding (3.7-4.9% per year)"),
            Fixed(
                "Anticoagulation often still recommended, but requires careful consideration of risk-benefit ratio. URGENTLY address modifiable risk factors: control hypertension (target <140/90), discontinue NSAIDs and unnecessary antiplatelets if possible, reduce alcohol use, switch from warfarin to DOAC if INR labile. Consider gastric protection (PPI) if on dual antiplatelet therapy. Closer monitoring recommended (every 3 months). Fall risk assessment and prevention strategies essential. Shared decision-making with patient crucial.",
            ),
        ),
        band(
            5.0,
            "High Risk",
            Computed(has_bled_high_interpretation),
            Fixed(
                "CAUTION: Bleeding risk is substantial. Anticoagulation decision requires careful individualized assessment. Score ≥3 suggests need to investigate and correct modifiable bleeding risks. ESSENTIAL: Control hypertension aggressively, stop all NSAIDs and unnecessary antiplatelet drugs, address alcohol use, ensure stable anticoagulation (strongly consider DOAC over warfarin). Consider gastroenterology referral if GI bleeding history. Hematology consultation may be helpful. Very close monitoring required (monthly to every 3 months). Comprehensive fall prevention program. Some patients may benefit from left atrial appendage occlusion device if anticoagulation too risky but stroke risk high. Discuss risks/benefits extensively with patient.",
            ),
        ),
    ],
    catch_all: entry(
        "Very High Risk",
        Fixed(
            "Very high risk of major bleeding (>12% per year). Anticoagulation may be contraindicated.",
        ),
        Fixed(
            "CRITICAL: Bleeding risk is extremely high. Anticoagulation may cause more harm than benefit. Strongly consider alternative strategies: left atrial appendage closure device (Watchman) for atrial fibrillation patients with high stroke risk. If anticoagulation absolutely necessary, use lowest effective intensity, DOACs strongly preferred over warfarin. MANDATORY interventions: aggressive BP control, eliminate all modifiable risk factors, nephrology consultation if renal dysfunction, hepatology if liver disease, hematology consultation for bleeding diathesis. Very frequent monitoring (monthly). Comprehensive patient education. Consider hospice/palliative care consultation if multiple comorbidities. Document extensive shared decision-making. Some patients may be better served by aspirin alone or no antithrombotic therapy after thorough discussion.",
        ),
    ),
};

fn has_bled_high_interpretation(score: f64, _: &GuidanceContext) -> String {
    let rate = if score < 4.0 { "5.8-6.0%" } else { "8.7-9.1%" };
    format!("High risk of major bleeding ({rate} per year)")
}

// ---------------------------------------------------------------------------
// ABCD2

static ABCD2: GuidanceTable = GuidanceTable {
    bands: &[
        band(
            4.0,
            "Low Risk",
            Fixed("Low short-term stroke risk: 2-day 1.0%, 7-day 1.2%, 90-day 3.1%"),
            Fixed(
                "Outpatient evaluation may be reasonable if rapid workup (within 24-48 hours) is available: brain imaging, vascular imaging, ECG, and laboratory studies. Start antiplatelet therapy and address vascular risk factors.",
            ),
        ),
        band(
            6.0,
            "Moderate Risk",
            Fixed("Moderate short-term stroke risk: 2-day 4.1%, 7-day 5.9%, 90-day 9.8%"),
            Fixed(
                "Hospital admission or urgent TIA clinic evaluation is reasonable. Expedited brain and vascular imaging, cardiac monitoring. Antiplatelet therapy; consider short-term dual antiplatelet therapy. Neurology consultation.",
            ),
        ),
    ],
    catch_all: entry(
        "High Risk",
        Fixed("High short-term stroke risk: 2-day 8.1%, 7-day 11.7%, 90-day 17.8%"),
        Fixed(
            "Hospital admission recommended for urgent workup and monitoring. Immediate brain and vascular imaging, cardiac monitoring. Short-term dual antiplatelet therapy if no contraindication. Urgent neurology consultation.",
        ),
    ),
};
