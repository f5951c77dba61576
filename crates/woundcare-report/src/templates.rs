//! Built-in templates and the static per-status guidance they draw on.

use woundcare_core::models::risk::RiskStatus;

/// Headline used when no generated summary is available.
pub fn status_headline(status: RiskStatus) -> &'static str {
    match status {
        RiskStatus::Stable => {
            "Status: Stable. Continue current wound care and follow up as scheduled."
        }
        RiskStatus::Monitor => {
            "Status: Monitor. Observe wound daily; photograph change. Contact clinician if worsening."
        }
        RiskStatus::Concerning => {
            "Status: Concerning. Consider nurse review; increase dressing frequency and monitor."
        }
        RiskStatus::Urgent => {
            "Status: URGENT. Recommend immediate clinician review; consider in-person evaluation."
        }
    }
}

pub fn next_steps(status: RiskStatus) -> &'static [&'static str] {
    match status {
        RiskStatus::Stable | RiskStatus::Monitor => &[
            "Clean with saline and apply a clean dressing daily.",
            "Monitor for increased redness, swelling, or discharge.",
            "Follow up with your clinician within 3-7 days or sooner if concerned.",
        ],
        RiskStatus::Concerning | RiskStatus::Urgent => &[
            "Seek clinical review or contact primary care.",
            "Keep the area clean and avoid applying unprescribed treatments.",
            "If there is spreading redness, fever, or increasing pain, go to emergency care.",
        ],
    }
}

pub const FALLBACK_SUMMARY_NAME: &str = "fallback_summary.txt";

pub const FALLBACK_SUMMARY: &str = "{{ headline }}
{% if rationale %}
Findings:
{% for line in rationale %}- {{ line }}
{% endfor %}{% endif %}
Suggested next steps:
{% for step in steps %}- {{ step }}
{% endfor %}";

pub const REPORT_NAME: &str = "clinician_report.txt";

pub const REPORT: &str = "Wound assessment report
Subject: {{ subject_id }}
{% if generated_at %}Generated: {{ generated_at }}
{% endif %}
Status: {{ status }}

Metrics
  Area:          {{ area_px }} px ({{ area_pct }}%)
  Redness:       {{ redness_score }}
  Exudate ratio: {{ exudate_ratio }}
  Brightness:    {{ brightness_score }}
  Blur (var):    {{ blur_score }}
{% if quality_issues %}  Image quality: {{ quality_issues | join(sep=\", \") }}
{% endif %}
Trend since last record
{% if trend %}{% for t in trend %}  {{ t.label }}: {{ t.tag }} ({{ t.delta }})
{% endfor %}{% else %}  No previous record.
{% endif %}
Rules triggered
{% for r in rules %}  [{{ r.id }}] {{ r.rationale }}
{% endfor %}{% if context %}
Patient context
{% for c in context %}  {{ c.name }}: {{ c.value }}
{% endfor %}{% endif %}{% if summary %}
Summary
{{ summary }}
{% endif %}
Automated assistive output, not medical advice.
";
