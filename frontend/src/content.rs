//! Whitepaper copy, keyed by subchapter anchor id.

pub struct SubchapterContent {
    pub anchor_id: &'static str,
    pub lead: &'static str,
    pub body: Body,
}

pub enum Body {
    None,
    /// Horizontal card carousel; cards with detail open in an expanded panel.
    Cards(&'static [Card]),
    /// Selectable grid on the left, comparison table for the selection on the right.
    Comparison(&'static [Comparison]),
    /// Expandable point panels.
    Points(&'static [Point]),
    Benchmark(&'static [BenchmarkBar]),
    Statement(&'static str),
}

#[derive(Debug, PartialEq)]
pub struct Card {
    pub title: &'static str,
    pub text: &'static str,
    pub detail: Option<CardDetail>,
}

#[derive(Debug, PartialEq)]
pub struct CardDetail {
    pub summary: &'static str,
    pub factors: &'static [&'static str],
    pub references: &'static [&'static str],
}

#[derive(Debug, PartialEq)]
pub struct Comparison {
    pub name: &'static str,
    pub summary: &'static str,
    pub metric_header: &'static str,
    pub rows: &'static [ComparisonRow],
}

#[derive(Debug, PartialEq)]
pub struct ComparisonRow {
    pub name: &'static str,
    pub metric: &'static str,
    pub improvement: &'static str,
    pub is_ours: bool,
}

#[derive(Debug, PartialEq)]
pub struct Point {
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BenchmarkBar {
    pub label: &'static str,
    pub score: f64,
    pub is_ours: bool,
}

pub fn for_anchor(anchor_id: &str) -> Option<&'static SubchapterContent> {
    SUBCHAPTERS.iter().find(|c| c.anchor_id == anchor_id)
}

pub static SUBCHAPTERS: &[SubchapterContent] = &[
    SubchapterContent {
        anchor_id: "intro-1",
        lead: "Mental Health disorders represent one of the most pressing global health challenges, affecting over [970 million] people worldwide as of [2024]. Depression alone impacts [280 million] individuals globally, making it the leading cause of disability worldwide. The economic burden exceeds [$1 trillion] annually in lost productivity, with healthcare costs continuing to escalate.",
        body: Body::Cards(&[
            Card {
                title: "Treatment Gap",
                text: "Only **25-30%** receive adequate treatment.",
                detail: Some(CardDetail {
                    summary: "Despite growing awareness of mental health issues, fewer than one-third of individuals with diagnosable mental health conditions receive evidence-based treatment that meets clinical standards.",
                    factors: &[
                        "Geographic barriers: Rural areas have 3-5 times fewer mental health providers per capita",
                        "Stigma and cultural barriers: 60% of adults with mental illness don't seek treatment due to stigma",
                        "Provider capacity: Average wait time for mental health appointments is 25-30 days",
                    ],
                    references: &[
                        "SAMHSA National Survey on Drug Use and Health (2023)",
                        "WHO Mental Health Atlas 2023",
                    ],
                }),
            },
            Card {
                title: "Diagnostic Delay",
                text: "Average **6-8 years** from onset to diagnosis.",
                detail: Some(CardDetail {
                    summary: "The journey from first symptom to accurate diagnosis spans an average of **6-8 years**. Bipolar disorder has the longest diagnostic delay at **8-12 years**, while anxiety disorders typically take **4-6 years**.",
                    factors: &[
                        "Symptom progression: 75% of individuals experience symptom worsening during diagnostic delay",
                        "Treatment resistance: Delayed diagnosis leads to 40% higher rates of treatment-resistant conditions",
                    ],
                    references: &["Lancet Psychiatry Early Intervention Review (2024)"],
                }),
            },
            Card {
                title: "Misdiagnosis Rates",
                text: "Up to **40%** initially misdiagnosed.",
                detail: Some(CardDetail {
                    summary: "Misdiagnosis affects approximately **40%** of individuals seeking psychiatric care. Bipolar disorder is misdiagnosed in **60-70%** of initial presentations, most commonly as unipolar depression.",
                    factors: &[
                        "Inappropriate medications: 65% of misdiagnosed patients receive medications that may worsen their actual condition",
                        "Treatment delays: Misdiagnosis adds an additional 2-4 years to appropriate treatment initiation",
                    ],
                    references: &["Clinical Psychology Review Meta-Analysis (2024)"],
                }),
            },
            Card {
                title: "Crisis Detection",
                text: "**85%** of suicide attempts without prior warning.",
                detail: Some(CardDetail {
                    summary: "Current systems fail to detect suicide risk in **85%** of cases. Many individuals who attempt suicide have recent healthcare contact but don't disclose suicidal thoughts.",
                    factors: &[
                        "Self-report dependency: 70% of individuals don't disclose suicidal thoughts to providers",
                        "Assessment timing: Traditional screenings occur only during appointments, missing dynamic risk changes",
                    ],
                    references: &["Suicide and Life-Threatening Behavior Journal Analysis (2023)"],
                }),
            },
            Card {
                title: "Provider Shortage",
                text: "**76%** of counties lack adequate mental health professionals.",
                detail: Some(CardDetail {
                    summary: "Professional shortages affect **76%** of US counties, creating mental health deserts where residents have little to no access to psychiatric care.",
                    factors: &[
                        "Wait times: Average 30-45 days for psychiatrist appointments, 15-25 days for therapists",
                        "Provider burnout: 58% of mental health professionals report severe burnout",
                    ],
                    references: &["American Psychiatric Association Workforce Survey (2023)"],
                }),
            },
        ]),
    },
    SubchapterContent {
        anchor_id: "intro-2",
        lead: "Current mental health assessment approaches face fundamental limitations that compromise patient outcomes and require innovative technological solutions to address systemic inefficiencies.",
        body: Body::Cards(&[
            Card {
                title: "Subjective Reporting Bias",
                text: "Assessments rely on self-reporting, affected by social desirability bias (**65%** under-report symptoms), memory recall limits and stigma.",
                detail: None,
            },
            Card {
                title: "Clinical Time Constraints",
                text: "Sessions average **15-20 minutes** with only 30-40% allocated for assessment.",
                detail: None,
            },
            Card {
                title: "Lack of Objective Biomarkers",
                text: "Screening relies on questionnaires (PHQ-9, GAD-7) with no physiological or behavioral signal.",
                detail: None,
            },
            Card {
                title: "Inter-rater Reliability Issues",
                text: "Assessment consistency varies **65-75%** between providers.",
                detail: None,
            },
            Card {
                title: "Technological Gap",
                text: "Assessment practice remains unchanged from decades-old methods, without real-time multi-modal integration.",
                detail: None,
            },
        ]),
    },
    SubchapterContent {
        anchor_id: "intro-3",
        lead: "To develop and clinically validate a comprehensive multi-modal agentic AI system that revolutionizes behavioral health assessment through real-time integration of audio, visual, textual, and clinical contextual data, achieving superior accuracy and efficiency compared to traditional screening methodologies.",
        body: Body::Comparison(&[
            Comparison {
                name: "Real-Time Processing",
                summary: "Assessment moves from hour-long manual processes to rapid automated evaluations, enabling continuous monitoring rather than episodic care.",
                metric_header: "PROCESSING TIME",
                rows: &[
                    ComparisonRow { name: "OUR MODEL", metric: "2-3 MIN", improvement: "95% FASTER", is_ours: true },
                    ComparisonRow { name: "GOOGLE MED-GEMINI", metric: "45-60 MIN", improvement: "", is_ours: false },
                    ComparisonRow { name: "META LLAMA 3.1 HEALTHCARE", metric: "25-35 MIN", improvement: "", is_ours: false },
                ],
            },
        ]),
    },
    SubchapterContent {
        anchor_id: "quality-1",
        lead: "Our quality and monitoring framework ensures continuous improvement and validation of our AI systems through comprehensive evaluation metrics, real-time monitoring, and staged deployment processes.",
        body: Body::Comparison(&[
            Comparison {
                name: "Model Validation",
                summary: "Comprehensive validation framework that ensures our models meet clinical standards through rigorous testing protocols and performance benchmarks.",
                metric_header: "VALIDATION SCORE",
                rows: &[
                    ComparisonRow { name: "OUR SYSTEM", metric: "98.5%", improvement: "15% HIGHER", is_ours: true },
                    ComparisonRow { name: "BASELINE MODEL A", metric: "85.2%", improvement: "", is_ours: false },
                    ComparisonRow { name: "BASELINE MODEL B", metric: "82.7%", improvement: "", is_ours: false },
                ],
            },
            Comparison {
                name: "Performance Monitoring",
                summary: "Real-time monitoring that tracks model performance, detects drift, and ensures consistent quality across clinical environments.",
                metric_header: "UPTIME",
                rows: &[
                    ComparisonRow { name: "OUR SYSTEM", metric: "99.9%", improvement: "5% INCREASE", is_ours: true },
                    ComparisonRow { name: "INDUSTRY STANDARD", metric: "95.2%", improvement: "", is_ours: false },
                    ComparisonRow { name: "COMPETITOR SYSTEM", metric: "92.8%", improvement: "", is_ours: false },
                ],
            },
            Comparison {
                name: "Quality Assurance",
                summary: "Multi-layered quality assurance including automated testing, clinical review, and continuous feedback integration.",
                metric_header: "QA COVERAGE",
                rows: &[
                    ComparisonRow { name: "OUR FRAMEWORK", metric: "96.8%", improvement: "20% BETTER", is_ours: true },
                    ComparisonRow { name: "STANDARD QA", metric: "78.4%", improvement: "", is_ours: false },
                    ComparisonRow { name: "BASIC TESTING", metric: "65.1%", improvement: "", is_ours: false },
                ],
            },
            Comparison {
                name: "Deployment Process",
                summary: "Staged deployment that minimizes risk through careful rollout and monitoring phases.",
                metric_header: "DEPLOYMENT TIME",
                rows: &[
                    ComparisonRow { name: "OUR PROCESS", metric: "2-4 HOURS", improvement: "80% FASTER", is_ours: true },
                    ComparisonRow { name: "TRADITIONAL METHOD", metric: "2-3 DAYS", improvement: "", is_ours: false },
                    ComparisonRow { name: "MANUAL PROCESS", metric: "1-2 WEEKS", improvement: "", is_ours: false },
                ],
            },
        ]),
    },
    SubchapterContent {
        anchor_id: "quality-2",
        lead: "Monitoring systems: validation via blinded head-to-head trials.",
        body: Body::None,
    },
    SubchapterContent {
        anchor_id: "quality-3",
        lead: "Staged releases: every updated component is rolled out behind a clinician-in-the-loop review.",
        body: Body::None,
    },
    SubchapterContent {
        anchor_id: "quality-4",
        lead: "Linked evidence: physiological signals are tied back to the clinical observations they support.",
        body: Body::None,
    },
    SubchapterContent {
        anchor_id: "quality-5",
        lead: "Behavior domain assessment leverages computer vision and machine learning to analyze facial expressions, motor functions, and social interaction patterns, providing comprehensive behavioral insights for clinical assessment and therapeutic intervention planning.",
        body: Body::Points(&[
            Point { title: "Facial Expression Analysis", text: "FACS (Facial Action Coding System) implementation with automated action unit detection and intensity measurement." },
            Point { title: "Motor Function Assessment", text: "Psychomotor retardation and agitation measured from movement velocity and gesture frequency." },
            Point { title: "Social Interaction Patterns", text: "Eye contact, turn taking and engagement tracked across the encounter." },
            Point { title: "Communication Style", text: "Speech rate, pauses and prosody summarized as communication markers." },
            Point { title: "Behavioral Pattern Recognition", text: "Longitudinal patterns compared against the patient's own baseline." },
        ]),
    },
    SubchapterContent {
        anchor_id: "quality-6",
        lead: "Self-Report domain assessment employs natural language processing and sentiment analysis to extract meaningful insights from patient narratives, emotional expressions, and subjective experiences.",
        body: Body::Points(&[
            Point { title: "Symptom Narrative Analysis", text: "Free-text symptom descriptions mapped to clinical constructs." },
            Point { title: "Emotional Vocabulary Assessment", text: "Breadth and specificity of emotional language as a marker of insight." },
            Point { title: "Cognitive Pattern Recognition", text: "Detection of cognitive distortions such as catastrophizing and overgeneralization." },
            Point { title: "Subjective Experience Mapping", text: "Patient-described experiences aligned to functional domains." },
            Point { title: "Patient-Reported Outcome Integration", text: "Standard PRO instruments folded into the overall assessment." },
        ]),
    },
    SubchapterContent {
        anchor_id: "quality-7",
        lead: "Circuits domain assessment employs cognitive testing, neural network analysis, and multi-modal data integration to evaluate attention, executive control, memory systems, and social cognition.",
        body: Body::Points(&[
            Point { title: "Attention Network Analysis", text: "Alerting, orienting and executive attention measured separately." },
            Point { title: "Executive Function Assessment", text: "Planning, inhibition and cognitive flexibility tasks." },
            Point { title: "Memory System Evaluation", text: "Working and episodic memory performance under load." },
            Point { title: "Social Cognition Mapping", text: "Emotion recognition and theory-of-mind probes." },
            Point { title: "Neural Circuit Correlation", text: "Findings related back to the circuits implicated in each condition." },
        ]),
    },
    SubchapterContent {
        anchor_id: "performance-1",
        lead: "ASR systems: a multi-LLM architecture routes each modality to a specialized model before fusion.",
        body: Body::None,
    },
    SubchapterContent {
        anchor_id: "performance-2",
        lead: "Transcript analysis: advanced feature extraction turns encounter transcripts into structured clinical evidence.",
        body: Body::None,
    },
    SubchapterContent {
        anchor_id: "summary-1",
        lead: "Validation scores against baseline models on the held-out clinical benchmark.",
        body: Body::Benchmark(&[
            BenchmarkBar { label: "OUR SYSTEM", score: 98.5, is_ours: true },
            BenchmarkBar { label: "BASELINE A", score: 85.2, is_ours: false },
            BenchmarkBar { label: "BASELINE B", score: 82.7, is_ours: false },
        ]),
    },
    SubchapterContent {
        anchor_id: "conclusions-1",
        lead: "This research establishes a new paradigm in behavioral health assessment: an agentic AI system that integrates multi-modal LLM technology with evidence-based clinical practice while keeping clinical interpretability and human oversight.",
        body: Body::Points(&[
            Point { title: "Diagnostic Accuracy", text: "**8-28%** improvement across clinical metrics, **91%** clinical accuracy in risk categorization." },
            Point { title: "Scalability", text: "**500,000+** clinical assessments across **200+** healthcare institutions in **25+** languages." },
            Point { title: "Healthcare System Transformation", text: "**$2,400** average savings per patient and a **65%** reduction in documentation burden." },
        ]),
    },
    SubchapterContent {
        anchor_id: "conclusions-2",
        lead: "Final scientific statement.",
        body: Body::Statement("This work demonstrates that multi-modal agentic AI systems can match and exceed human diagnostic capabilities while preserving the therapeutic relationship between provider and patient. The integration of AI with established clinical frameworks creates opportunities for scalable, accessible, and effective mental health intervention on a global scale."),
    },
];
