use crate::domain::{Region, VoteResults, VoteTuple};
use crate::style::{Color, Style};

/// A region with its colors resolved, ready for a surface to draw
#[derive(Debug, Clone)]
pub struct PaintedRegion {
    pub name: String,
    pub points: Vec<(f64, f64)>,
    pub outline: Color,
    pub fill: Color,
}

/// Resolve a color for every region, preserving file order.
///
/// Lookup is an exact string match against the results table. A missing
/// name is not an error: some subregions legitimately report no votes
/// (a capital district, say) and still render through the zero-vote branch
/// of the active style. Note the match is whitespace-sensitive on both
/// sides; `unmatched_regions` exists to surface accidental misses.
pub fn build_draw_plan(
    regions: Vec<Region>,
    results: &VoteResults,
    style: Style,
) -> Vec<PaintedRegion> {
    regions
        .into_iter()
        .map(|region| {
            let votes = results
                .get(&region.name)
                .copied()
                .unwrap_or(VoteTuple::ZERO);
            PaintedRegion {
                outline: style.outline(),
                fill: style.fill(&votes),
                name: region.name,
                points: region.points,
            }
        })
        .collect()
}

/// Names of regions with no row in the results table
pub fn unmatched_regions<'a>(regions: &'a [Region], results: &VoteResults) -> Vec<&'a str> {
    regions
        .iter()
        .filter(|r| !results.contains_key(&r.name))
        .map(|r| r.name.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(name: &str) -> Region {
        Region::new(name.to_string(), vec![(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)])
    }

    #[test]
    fn test_plan_preserves_region_order() {
        let regions = vec![region("b"), region("a"), region("c")];
        let results = VoteResults::new();

        let plan = build_draw_plan(regions, &results, Style::BlackWhite);
        let names: Vec<&str> = plan.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_lookup_miss_defaults_to_zero_votes() {
        let regions = vec![region("Federal District")];
        let results = VoteResults::new();

        // Under the purple style a zero tuple renders as the mid gray
        let plan = build_draw_plan(regions, &results, Style::Purple);
        assert_eq!(plan[0].fill, Color::GRAY);
    }

    #[test]
    fn test_lookup_is_whitespace_sensitive() {
        let regions = vec![region("Ohio")];
        let mut results = VoteResults::new();
        results.insert("Ohio ".to_string(), VoteTuple::new(10, 0, 0));

        let plan = build_draw_plan(regions.clone(), &results, Style::RedBlue);
        // The trailing space keeps the row from matching, so the region
        // falls back to zero votes and the tie-gray fill
        assert_eq!(plan[0].fill, Color::GRAY);
        assert_eq!(unmatched_regions(&regions, &results), vec!["Ohio"]);
    }

    #[test]
    fn test_matched_region_uses_its_votes() {
        let regions = vec![region("Texas")];
        let mut results = VoteResults::new();
        results.insert("Texas".to_string(), VoteTuple::new(9, 4, 1));

        let plan = build_draw_plan(regions, &results, Style::RedBlue);
        assert_eq!(plan[0].fill, Color::RED);
        assert_eq!(plan[0].outline, Color::WHITE);
    }
}
