//! Pre-loaded sample announcements for the "Try Samples" tab.
//!
//! Static data only: selecting sample *i* must populate the request fields
//! with exactly these literals, unmodified.

/// One example announcement: a headline plus the body text that would be
/// submitted for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleAnnouncement {
    pub title: &'static str,
    pub text: &'static str,
}

/// The demo catalog. A mix of genuine deals and announcements the service
/// is expected to reject.
pub const SAMPLE_ANNOUNCEMENTS: &[SampleAnnouncement] = &[
    SampleAnnouncement {
        title: "KKR Acquisition - Large PE Deal",
        text: "KKR & Co. Inc. announces the acquisition of 80% stake in ABC Technology Ltd \
for a total consideration of USD 200 million. The transaction represents a strategic \
investment in the Southeast Asian technology sector. Goldman Sachs is acting as \
financial adviser to KKR. The acquisition is expected to complete in Q1 2026.",
    },
    SampleAnnouncement {
        title: "Company XYZ - Quarterly Results (Should Reject)",
        text: "Company XYZ Limited announces its unaudited financial results for Q3 2025. \
Revenue increased 15% year-over-year to $50 million. Net profit was $8 million, \
up from $6 million in the prior year quarter. The Board is pleased with the results.",
    },
    SampleAnnouncement {
        title: "Property Sale Announcement (Should Reject)",
        text: "ABC Corporation announces the disposal of its commercial property located at \
123 Main Street for a consideration of $12 million. The property sale is part of \
the company's asset optimization strategy.",
    },
    SampleAnnouncement {
        title: "Strategic Investment - Mid-Size Deal",
        text: "DEF Ltd announces a proposed strategic investment to acquire 65% of the issued \
share capital of XYZ Pte Ltd for SGD 85 million in cash. The acquisition will expand \
DEF's presence in the Asian market. HSBC is advising on the transaction.",
    },
    SampleAnnouncement {
        title: "Small Deal - Below Threshold (Should Reject)",
        text: "Startup Inc. announces the acquisition of Tech Co. for a total consideration \
of USD 3 million. The acquisition will strengthen Startup's product capabilities.",
    },
];

/// Lookup by index. No behavior beyond this.
pub fn get(index: usize) -> Option<&'static SampleAnnouncement> {
    SAMPLE_ANNOUNCEMENTS.get(index)
}
