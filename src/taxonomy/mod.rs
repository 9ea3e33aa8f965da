//! Static category taxonomy for keyword classification.
//!
//! Six categories, each with a weighted term list and a one-sentence
//! description. The declaration order of [`CATEGORIES`] is a contract: the
//! classifier resolves score ties in favor of the first-declared category.
//! Terms are lowercase single words (the tokenizer never produces anything
//! else) with small positive weights; extending a category is a data change
//! only.

/// One classification category: display name, description sentence, and
/// weighted terms. Terms must be unique within a category.
pub struct CategoryDef {
    pub name: &'static str,
    pub blurb: &'static str,
    pub terms: &'static [(&'static str, u32)],
}

/// Category used when no taxonomy term matches at all. Every website
/// displays some form of information.
pub const DEFAULT_CATEGORY: &str = "information";

/// Look up the description sentence for a category name.
pub fn blurb_for(name: &str) -> &'static str {
    CATEGORIES
        .iter()
        .find(|c| c.name == name)
        .map(|c| c.blurb)
        .unwrap_or("This website provides meaningful information about something that can be seen in the keywords.")
}

/// All categories in fixed declaration order.
pub const CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        name: "shopping",
        blurb: "This website is a shopping platform. You can buy the products that you like from here.",
        terms: &[
            ("buy", 2), ("shop", 2), ("cart", 2), ("wishlist", 2), ("price", 2),
            ("product", 2), ("sale", 2), ("discount", 2), ("order", 2), ("checkout", 2),
            ("purchase", 2), ("deal", 2), ("shipping", 1), ("payment", 1), ("delivery", 1),
            ("basket", 2), ("offer", 2), ("promo", 2), ("coupon", 2), ("refund", 1),
            ("return", 1), ("stock", 1), ("inventory", 1), ("brand", 1), ("review", 1),
            ("rating", 1), ("gift", 1), ("card", 1), ("track", 1), ("ship", 1),
            ("store", 2), ("mall", 2), ("market", 2), ("ecommerce", 2), ("online", 2),
            ("retail", 2), ("wholesale", 1), ("auction", 1), ("bid", 1), ("win", 1),
            ("clearance", 1), ("outlet", 1), ("flash", 1), ("daily", 1), ("exclusive", 1),
            ("limited", 1), ("preorder", 1), ("subscription", 1), ("membership", 1),
            ("loyalty", 1), ("points", 1), ("reward", 1), ("cashback", 1),
            ("installment", 1), ("finance", 1), ("credit", 1), ("debit", 1), ("wallet", 1),
        ],
    },
    CategoryDef {
        name: "travel",
        blurb: "This website is a travel platform. You can buy travel tickets or get information about places you want to go from here.",
        terms: &[
            ("flight", 2), ("hotel", 2), ("booking", 2), ("reservation", 2), ("trip", 2),
            ("vacation", 2), ("tour", 2), ("destination", 2), ("travel", 2), ("airline", 2),
            ("ticket", 2), ("luggage", 1), ("itinerary", 1), ("cruise", 1), ("resort", 1),
            ("beach", 1), ("adventure", 1), ("safari", 1), ("hiking", 1), ("backpack", 1),
            ("visa", 1), ("passport", 1), ("airport", 1), ("terminal", 1), ("boarding", 1),
            ("checkin", 1), ("checkout", 1), ("cabin", 1), ("suite", 1), ("hostel", 1),
            ("motel", 1), ("inn", 1), ("lodging", 1), ("accommodation", 1),
            ("transport", 1), ("transfer", 1), ("guide", 1), ("sightseeing", 1),
            ("attraction", 1), ("landmark", 1), ("culture", 1), ("cuisine", 1),
            ("local", 1), ("international", 1), ("domestic", 1), ("budget", 1),
            ("luxury", 1), ("package", 1), ("deal", 1), ("discount", 1), ("promo", 1),
            ("offer", 1), ("seasonal", 1), ("holiday", 1), ("festival", 1), ("event", 1),
            ("experience", 1),
        ],
    },
    CategoryDef {
        name: "information",
        blurb: "This website provides meaningful information about something that can be seen in the keywords.",
        terms: &[
            ("about", 2), ("contact", 2), ("faq", 2), ("help", 2), ("support", 2),
            ("blog", 2), ("news", 2), ("article", 2), ("post", 2), ("read", 2),
            ("guide", 1), ("resource", 1), ("documentation", 1), ("manual", 1),
            ("tutorial", 1), ("howto", 1), ("instruction", 1), ("step", 1), ("tip", 1),
            ("advice", 1), ("knowledge", 1), ("library", 1), ("archive", 1),
            ("history", 1), ("fact", 1), ("statistic", 1), ("data", 1), ("research", 1),
            ("study", 1), ("analysis", 1), ("report", 1), ("survey", 1), ("poll", 1),
            ("interview", 1), ("review", 1), ("rating", 1), ("feedback", 1),
            ("comment", 1), ("forum", 1), ("discussion", 1), ("community", 1),
            ("question", 1), ("answer", 1), ("explanation", 1), ("definition", 1),
            ("meaning", 1), ("example", 1),
        ],
    },
    CategoryDef {
        name: "social media",
        blurb: "This website is a social media platform where you can connect with other people.",
        terms: &[
            ("profile", 2), ("timeline", 2), ("feed", 2), ("post", 2), ("share", 2),
            ("like", 2), ("comment", 2), ("follow", 2), ("follower", 2), ("hashtag", 2),
            ("instagram", 2), ("facebook", 2), ("whatsapp", 2), ("reddit", 2),
            ("twitter", 2), ("message", 1), ("chat", 1), ("group", 1), ("community", 1),
            ("network", 1), ("connection", 1), ("friend", 1), ("following", 1),
            ("story", 1), ("reel", 1), ("live", 1), ("stream", 1), ("video", 1),
            ("photo", 1), ("image", 1), ("album", 1), ("gallery", 1), ("filter", 1),
            ("effect", 1), ("trend", 1), ("viral", 1), ("meme", 1), ("emoji", 1),
            ("sticker", 1), ("gif", 1), ("poll", 1), ("quiz", 1), ("event", 1),
            ("notification", 1), ("alert", 1), ("update", 1), ("newsfeed", 1),
        ],
    },
    CategoryDef {
        name: "entertainment",
        blurb: "This website is an entertainment platform, typically used for recreational purposes.",
        terms: &[
            ("movie", 2), ("film", 2), ("tv", 2), ("show", 2), ("series", 2),
            ("episode", 2), ("stream", 2), ("watch", 2), ("listen", 2), ("music", 2),
            ("concert", 1), ("theater", 1), ("game", 1), ("play", 1), ("video", 1),
            ("song", 1), ("album", 1), ("artist", 1), ("band", 1), ("genre", 1),
            ("comedy", 1), ("drama", 1), ("action", 1), ("horror", 1), ("romance", 1),
            ("fantasy", 1), ("animation", 1), ("documentary", 1), ("trailer", 1),
            ("premiere", 1), ("release", 1), ("download", 1), ("upload", 1),
            ("subscribe", 1), ("channel", 1), ("playlist", 1), ("podcast", 1),
            ("radio", 1), ("live", 1), ("ticket", 1), ("event", 1), ("festival", 1),
            ("award", 1), ("nomination", 1), ("celebrity", 1), ("actor", 1),
            ("actress", 1), ("director", 1), ("producer", 1),
        ],
    },
    CategoryDef {
        name: "finance",
        blurb: "This website is a financial platform.",
        terms: &[
            ("bank", 2), ("account", 2), ("loan", 2), ("credit", 2), ("debit", 2),
            ("card", 2), ("payment", 2), ("transfer", 2), ("withdrawal", 2),
            ("deposit", 2), ("interest", 1), ("mortgage", 1), ("investment", 1),
            ("stock", 1), ("insurance", 1), ("tax", 1), ("refund", 1), ("budget", 1),
            ("expense", 1), ("income", 1), ("salary", 1), ("wage", 1), ("bonus", 1),
            ("dividend", 1), ("profit", 1), ("loss", 1), ("revenue", 1),
            ("expenditure", 1), ("savings", 1), ("retirement", 1), ("pension", 1),
            ("forex", 1), ("currency", 1), ("exchange", 1), ("rate", 1), ("crypto", 1),
            ("bitcoin", 1), ("ethereum", 1), ("wallet", 1), ("blockchain", 1),
            ("trading", 1), ("broker", 1), ("portfolio", 1), ("asset", 1),
            ("liability", 1), ("equity", 1), ("debt", 1), ("report", 1),
            ("statement", 1),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_six_categories_in_declared_order() {
        let names: Vec<&str> = CATEGORIES.iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            [
                "shopping",
                "travel",
                "information",
                "social media",
                "entertainment",
                "finance"
            ]
        );
    }

    #[test]
    fn test_terms_unique_within_category() {
        for cat in CATEGORIES {
            let mut seen = HashSet::new();
            for (term, _) in cat.terms {
                assert!(seen.insert(term), "duplicate term '{term}' in {}", cat.name);
            }
        }
    }

    #[test]
    fn test_terms_are_lowercase_single_words() {
        for cat in CATEGORIES {
            for (term, weight) in cat.terms {
                assert!(*weight >= 1, "zero weight for '{term}'");
                assert!(
                    term.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()),
                    "term '{term}' in {} is not a lowercase word",
                    cat.name
                );
            }
        }
    }

    #[test]
    fn test_blurb_lookup_falls_back() {
        assert!(blurb_for("shopping").contains("shopping platform"));
        assert_eq!(blurb_for("nonsense"), blurb_for("information"));
    }
}
