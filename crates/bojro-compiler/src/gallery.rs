//! Bundled example programs, in the order a learner meets them.

use serde::Serialize;

/// One bundled program and the output it prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Example {
    /// Lookup key, e.g. `while-loop`.
    pub slug: &'static str,
    /// Display title: Bengali name with the English one in parentheses.
    pub title: &'static str,
    pub source: &'static str,
    /// Lines a run prints.
    pub expected_output: &'static [&'static str],
}

pub const EXAMPLES: &[Example] = &[
    Example {
        slug: "hello-world",
        title: "হ্যালো বিশ্ব (Hello World)",
        source: r#"// প্রথম প্রোগ্রাম
লিখো("হ্যালো বিশ্ব");
লিখো("বজ্র কম্পাইলারে স্বাগতম!");"#,
        expected_output: &["হ্যালো বিশ্ব", "বজ্র কম্পাইলারে স্বাগতম!"],
    },
    Example {
        slug: "addition",
        title: "যোগফল (Addition)",
        source: r#"// দুটি সংখ্যার যোগফল
পূর্ণসংখ্যা a = 10;
পূর্ণসংখ্যা b = 20;
পূর্ণসংখ্যা sum = a + b;

লিখো("যোগফল:");
লিখো(sum);"#,
        expected_output: &["যোগফল:", "30"],
    },
    Example {
        slug: "if-else",
        title: "যদি-নতুবা (If-Else)",
        source: r#"পূর্ণসংখ্যা number = 7;

যদি (number > 5) {
    লিখো("সংখ্যাটি ৫ এর চেয়ে বড়");
} নতুবা {
    লিখো("সংখ্যাটি ৫ বা তার ছোট");
}"#,
        expected_output: &["সংখ্যাটি ৫ এর চেয়ে বড়"],
    },
    Example {
        slug: "while-loop",
        title: "লুপ (While Loop)",
        source: r#"// ১ থেকে ৫ পর্যন্ত প্রিন্ট করা
পূর্ণসংখ্যা i = 1;

যতক্ষণ (i <= 5) {
    লিখো("লুপ চলছে...");
    লিখো(i);
    i = i + 1;
}
লিখো("সমাপ্ত!");"#,
        expected_output: &[
            "লুপ চলছে...",
            "1",
            "লুপ চলছে...",
            "2",
            "লুপ চলছে...",
            "3",
            "লুপ চলছে...",
            "4",
            "লুপ চলছে...",
            "5",
            "সমাপ্ত!",
        ],
    },
    Example {
        slug: "fibonacci",
        title: "ফিবোনাচ্চি (Fibonacci)",
        source: r#"// ফিবোনাচ্চি সিরিজ
পূর্ণসংখ্যা n = 10;
পূর্ণসংখ্যা t1 = 0;
পূর্ণসংখ্যা t2 = 1;
পূর্ণসংখ্যা nextTerm = t1 + t2;

লিখো(t1);
লিখো(t2);

পূর্ণসংখ্যা i = 3;
যতক্ষণ (i <= n) {
    লিখো(nextTerm);
    t1 = t2;
    t2 = nextTerm;
    nextTerm = t1 + t2;
    i = i + 1;
}"#,
        expected_output: &["0", "1", "1", "2", "3", "5", "8", "13", "21", "34"],
    },
];

/// Find a bundled program by slug.
pub fn find(slug: &str) -> Option<&'static Example> {
    EXAMPLES.iter().find(|ex| ex.slug == slug)
}

/// Every slug, in gallery order.
pub fn slugs() -> impl Iterator<Item = &'static str> {
    EXAMPLES.iter().map(|ex| ex.slug)
}
