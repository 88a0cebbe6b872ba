use cssparser::{
    AtRuleParser, CowRcStr, ParseError, Parser, ParserInput, ParserState, QualifiedRuleParser,
    StyleSheetParser,
};
use log::{debug, trace};

/// Conditional group at-rules whose blocks hold ordinary style rules
const GROUPING_AT_RULES: &[&str] = &["media", "supports", "layer", "container", "document"];

/// Collects the raw prelude of every style rule in compiled CSS, in document order.
///
/// Selectors are kept verbatim (trimmed) and are not deduplicated.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectorExtractor {
    /// Also descend into `@media`, `@supports` and friends
    pub include_nested: bool,
}

impl SelectorExtractor {
    pub fn new(include_nested: bool) -> Self {
        Self { include_nested }
    }

    pub fn extract(&self, css: &str) -> Vec<String> {
        let mut input = ParserInput::new(css);
        let mut parser = Parser::new(&mut input);
        let mut collector = RuleCollector { include_nested: self.include_nested };

        let mut selectors = Vec::new();
        collect_rules(&mut parser, &mut collector, &mut selectors);

        debug!("Extracted {} selectors", selectors.len());
        selectors
    }
}

/// Top-level selectors of `css`.
pub fn extract_selectors(css: &str) -> Vec<String> {
    SelectorExtractor::default().extract(css)
}

enum Node {
    Rule(String),
    Group(Vec<String>),
    Skipped,
}

struct RuleCollector {
    include_nested: bool,
}

fn collect_rules(input: &mut Parser<'_, '_>, collector: &mut RuleCollector, out: &mut Vec<String>) {
    for node in StyleSheetParser::new(input, collector) {
        match node {
            Ok(Node::Rule(selector)) if !selector.is_empty() => out.push(selector),
            Ok(Node::Group(nested)) => out.extend(nested),
            Ok(_) => {}
            Err((err, slice)) => trace!("Skipping invalid rule {:?}: {:?}", slice, err),
        }
    }
}

fn skip_remaining(input: &mut Parser<'_, '_>) {
    while input.next().is_ok() {}
}

impl<'i> QualifiedRuleParser<'i> for RuleCollector {
    type Prelude = String;
    type QualifiedRule = Node;
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        let start = input.position();
        skip_remaining(input);
        Ok(input.slice_from(start).trim().to_string())
    }

    fn parse_block<'t>(
        &mut self,
        prelude: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::QualifiedRule, ParseError<'i, Self::Error>> {
        skip_remaining(input);
        trace!("Found rule: '{}'", prelude);
        Ok(Node::Rule(prelude))
    }
}

impl<'i> AtRuleParser<'i> for RuleCollector {
    /// Whether the block should be searched for style rules
    type Prelude = bool;
    type AtRule = Node;
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        skip_remaining(input);
        Ok(self.include_nested && GROUPING_AT_RULES.iter().any(|g| name.eq_ignore_ascii_case(g)))
    }

    fn rule_without_block(
        &mut self,
        _prelude: Self::Prelude,
        _start: &ParserState,
    ) -> Result<Self::AtRule, ()> {
        Ok(Node::Skipped)
    }

    fn parse_block<'t>(
        &mut self,
        descend: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::AtRule, ParseError<'i, Self::Error>> {
        if !descend {
            skip_remaining(input);
            return Ok(Node::Skipped);
        }
        let mut nested = Vec::new();
        collect_rules(input, self, &mut nested);
        Ok(Node::Group(nested))
    }
}
