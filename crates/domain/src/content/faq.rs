use crate::entities::QaEntry;

pub(crate) const FAQ: &[QaEntry] = &[
    QaEntry {
        id: "what-are-grades",
        question: "What do the letter grades mean?",
        answer: "Every physical stat is graded from F (weakest) through E, D, C, B, A and S. \
                 Ø sits off the scale entirely and is reserved for feats the scale \
                 cannot measure.",
    },
    QaEntry {
        id: "why-no-description",
        question: "Why does a stat say \"No description available\"?",
        answer: "Descriptions are written by hand for each stat and grade. \
                 Combinations nobody has written yet show a placeholder instead.",
    },
    QaEntry {
        id: "are-grades-combined",
        question: "Is there an overall power score?",
        answer: "No. Grades describe individual capabilities and are never averaged \
                 or added together.",
    },
    QaEntry {
        id: "why-are-entries-locked",
        question: "Why are some entries greyed out?",
        answer: "Some entries contain lore spoilers and stay locked until you choose \
                 to unlock them. The choice is remembered on this device.",
    },
    QaEntry {
        id: "what-are-themes",
        question: "Why do some pages look different?",
        answer: "Pages tied to certain locations use that location's colors and ambient effects. \
                 Everywhere else uses the standard look.",
    },
];
