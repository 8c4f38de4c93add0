//! File structure expression parser.
//!
//! Turns a single-line shorthand expression such as
//! `components/{Header.jsx,Footer.jsx} + utils/helpers.js` into a flat,
//! order-preserving list of relative file paths.
//!
//! ## Syntax
//!
//! - `+` and `,` separate entries at bracket depth 0.
//! - `[...]`, `{...}`, `(...)` group entries under a base path:
//!   `api/{users.ts,auth.ts}` expands to `api/users.ts` and `api/auth.ts`.
//!   Groups nest arbitrarily.
//! - A `+` that starts a filename is literal (`+page.svelte`,
//!   `routes/+layout.svelte`), so SvelteKit-style names survive.
//! - Parentheses are only grouping syntax when the content has a top-level
//!   separator or the base is a bare name; otherwise they stay literal so
//!   Next.js route groups like `(dashboard)/page.tsx` are kept verbatim.
//!
//! The parser is a pure function over its input: no I/O, no shared state,
//! safe to call from any thread. Every malformed input collapses to the
//! single [`DomainError::InvalidExpressionSyntax`] signal; there is no
//! partial success.

use crate::domain::error::DomainError;

/// Parse an expression into an ordered list of relative paths.
///
/// On success the paths are non-empty, use `/` as separator, and appear in
/// declaration order (duplicates are not collapsed). Any syntax problem —
/// empty input, unopened or unclosed bracket, mismatched bracket kinds —
/// fails the whole expression atomically.
///
/// ```
/// use filemet_core::domain::parser::parse;
///
/// let paths = parse("components/{Header.jsx,Footer.jsx} + utils/helpers.js").unwrap();
/// assert_eq!(paths, ["components/Header.jsx", "components/Footer.jsx", "utils/helpers.js"]);
/// ```
pub fn parse(expression: &str) -> Result<Vec<String>, DomainError> {
    let cleaned = expression.trim();
    if cleaned.is_empty() {
        return Err(DomainError::InvalidExpressionSyntax);
    }

    let paths = expand(cleaned)?;
    Ok(paths.into_iter().filter(|p| !p.is_empty()).collect())
}

/// One pipeline pass: top-level split, then per-part expansion.
///
/// Group contents recurse through this same function, so nesting depth is
/// bounded only by input length.
fn expand(expr: &str) -> Result<Vec<String>, DomainError> {
    let mut paths = Vec::new();

    for part in split_top_level(expr)? {
        let trimmed = part.trim();
        if !trimmed.is_empty() {
            paths.extend(parse_part(trimmed)?);
        }
    }

    Ok(paths)
}

// ── Top-level split ───────────────────────────────────────────────────────────

/// Split on `+`/`,` that sit at bracket depth 0.
///
/// A single depth counter covers all three bracket kinds; kind mismatches are
/// caught later per part. Depth going negative (closer with no opener) or
/// staying positive at the end (unclosed opener) is an immediate error.
fn split_top_level(expr: &str) -> Result<Vec<String>, DomainError> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut depth: i32 = 0;
    let mut prev: Option<char> = None;
    let mut iter = expr.chars().peekable();

    while let Some(ch) = iter.next() {
        match ch {
            '[' | '{' | '(' => {
                depth += 1;
                current.push(ch);
            }
            ']' | '}' | ')' => {
                depth -= 1;
                current.push(ch);
                if depth < 0 {
                    return Err(DomainError::InvalidExpressionSyntax);
                }
            }
            ',' if depth == 0 => {
                parts.push(std::mem::take(&mut current));
            }
            '+' if depth == 0 => {
                if plus_is_separator(&current, prev, iter.peek().copied()) {
                    parts.push(std::mem::take(&mut current));
                } else {
                    // Literal filename prefix, e.g. `+page.svelte`.
                    current.push(ch);
                }
            }
            _ => current.push(ch),
        }
        prev = Some(ch);
    }

    if !current.trim().is_empty() {
        parts.push(current);
    }

    if depth != 0 {
        return Err(DomainError::InvalidExpressionSyntax);
    }

    Ok(parts)
}

/// Decide whether a depth-0 `+` separates entries or belongs to a filename.
///
/// It separates when surrounded by whitespace on either side, or when it is
/// neither at the start of the accumulating token nor directly after `/`.
/// So `file.ts+another.ts` splits, while `+file.ts` and
/// `folder/+component.tsx` stay literal.
fn plus_is_separator(current: &str, prev: Option<char>, next: Option<char>) -> bool {
    let whitespace_before = prev.is_some_and(char::is_whitespace);
    let whitespace_after = next.is_some_and(char::is_whitespace);
    let at_start_of_token = current.trim().is_empty();
    let after_path_separator = prev == Some('/');

    whitespace_before || whitespace_after || (!at_start_of_token && !after_path_separator)
}

// ── Per-part parsing ──────────────────────────────────────────────────────────

/// Expand a single top-level part into one or more paths.
fn parse_part(part: &str) -> Result<Vec<String>, DomainError> {
    validate_bracket_kinds(part)?;

    let Some(group) = find_trailing_group(part) else {
        // Plain path without a grouping suffix.
        return Ok(vec![normalize_path(part)]);
    };

    let content_is_empty = group.content.trim().is_empty();

    // Square and curly brackets always group. Parentheses group only when the
    // content has a top-level separator, or the base is a bare name (no `/`)
    // with non-empty content — `pages(home.tsx)` groups, `(dashboard)/page.tsx`
    // and `src/report(final)` stay literal.
    let treat_as_group = if group.open == '(' {
        let bare_name_suffix =
            !group.base.is_empty() && !group.base.contains('/') && !content_is_empty;
        has_top_level_separator(group.content) || bare_name_suffix
    } else {
        true
    };

    if treat_as_group || content_is_empty {
        let sub_paths = expand(group.content)?;
        if group.base.is_empty() {
            return Ok(sub_paths);
        }

        // Join with exactly one slash: collapse trailing slashes on the base
        // and leading slashes on each sub-path.
        let base = group.base.trim().trim_end_matches('/');
        Ok(sub_paths
            .into_iter()
            .map(|p| format!("{base}/{}", p.trim_start_matches('/')))
            .collect())
    } else {
        Ok(vec![normalize_path(part)])
    }
}

/// Stack-match every bracket in the part against its kind.
///
/// The single depth counter in [`split_top_level`] cannot see kind
/// mismatches (`folder([)]` keeps depth balanced); brackets anywhere in the
/// part participate in this check, even mid-string ones that never trigger
/// grouping.
fn validate_bracket_kinds(part: &str) -> Result<(), DomainError> {
    let mut stack = Vec::new();
    for ch in part.chars() {
        match ch {
            '[' | '{' | '(' => stack.push(ch),
            ']' | '}' | ')' => match stack.pop() {
                Some(open) if closer_for(open) == ch => {}
                _ => return Err(DomainError::InvalidExpressionSyntax),
            },
            _ => {}
        }
    }
    Ok(())
}

/// A grouping suffix split out of a part: `base` `open` `content` `close`.
struct TrailingGroup<'a> {
    base: &'a str,
    open: char,
    content: &'a str,
}

/// Locate the trailing bracket group of a part, if any.
///
/// Only the rightmost closing bracket is considered, and only when it is the
/// last character of the part; its opener is found scanning backward with
/// nesting counted for that bracket kind alone. Brackets that stop short of
/// the part's end never trigger grouping.
fn find_trailing_group(part: &str) -> Option<TrailingGroup<'_>> {
    let chars: Vec<(usize, char)> = part.char_indices().collect();

    let (close_idx, close_byte, close) = chars
        .iter()
        .rev()
        .enumerate()
        .find_map(|(rev_idx, &(byte, ch))| {
            matches!(ch, ']' | '}' | ')').then_some((chars.len() - 1 - rev_idx, byte, ch))
        })?;

    if close_idx != chars.len() - 1 {
        return None;
    }

    let open = opener_for(close);
    let mut nesting = 1u32;
    let mut open_byte = None;
    for &(byte, ch) in chars[..close_idx].iter().rev() {
        if ch == close {
            nesting += 1;
        } else if ch == open {
            nesting -= 1;
            if nesting == 0 {
                open_byte = Some(byte);
                break;
            }
        }
    }

    let open_byte = open_byte?;
    Some(TrailingGroup {
        base: &part[..open_byte],
        open,
        content: &part[open_byte + 1..close_byte],
    })
}

/// True when the content has a `+` or `,` at bracket depth 0.
fn has_top_level_separator(content: &str) -> bool {
    let mut depth: i32 = 0;
    for ch in content.chars() {
        match ch {
            '[' | '{' | '(' => depth += 1,
            ']' | '}' | ')' => depth -= 1,
            '+' | ',' if depth == 0 => return true,
            _ => {}
        }
    }
    false
}

/// Trim the path and collapse whitespace around `/` separators.
///
/// Whitespace elsewhere inside a segment is preserved:
/// `folder / my file.ts` becomes `folder/my file.ts`.
fn normalize_path(part: &str) -> String {
    part.split('/')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("/")
}

fn closer_for(open: char) -> char {
    match open {
        '[' => ']',
        '{' => '}',
        _ => ')',
    }
}

fn opener_for(close: char) -> char {
    match close {
        ']' => '[',
        '}' => '{',
        _ => '(',
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(expr: &str) -> Vec<String> {
        parse(expr).unwrap_or_else(|e| panic!("expected success for {expr:?}, got {e}"))
    }

    fn err(expr: &str) {
        assert_eq!(
            parse(expr),
            Err(DomainError::InvalidExpressionSyntax),
            "expected syntax error for {expr:?}"
        );
    }

    // ── Simple paths and separators ───────────────────────────────────────

    #[test]
    fn single_path_passes_through() {
        assert_eq!(ok("src/main.rs"), ["src/main.rs"]);
    }

    #[test]
    fn normalized_path_is_unchanged() {
        // Idempotence: an already-normalized path round-trips.
        assert_eq!(ok("api/users/controller.ts"), ["api/users/controller.ts"]);
    }

    #[test]
    fn plus_with_spaces_separates() {
        assert_eq!(ok("file.ts + file2.ts"), ["file.ts", "file2.ts"]);
    }

    #[test]
    fn plus_without_spaces_separates_between_tokens() {
        assert_eq!(ok("file.ts+another.ts"), ["file.ts", "another.ts"]);
    }

    #[test]
    fn comma_separates() {
        assert_eq!(ok("a.ts,b.ts,c.ts"), ["a.ts", "b.ts", "c.ts"]);
    }

    #[test]
    fn order_is_preserved() {
        assert_eq!(ok("z.ts + a.ts + m.ts"), ["z.ts", "a.ts", "m.ts"]);
    }

    #[test]
    fn duplicates_are_not_deduplicated() {
        assert_eq!(ok("a.ts + a.ts"), ["a.ts", "a.ts"]);
    }

    // ── Leading/trailing separators ───────────────────────────────────────

    #[test]
    fn trailing_separator_is_dropped() {
        assert_eq!(ok("a + b +"), ["a", "b"]);
    }

    #[test]
    fn trailing_comma_is_dropped() {
        assert_eq!(ok("a,b,"), ["a", "b"]);
    }

    #[test]
    fn leading_separator_with_space_is_dropped() {
        assert_eq!(ok("+ file.ts"), ["file.ts"]);
    }

    #[test]
    fn stray_commas_produce_no_empty_paths() {
        assert_eq!(ok(",,a.ts,,"), ["a.ts"]);
    }

    // ── Literal `+` in filenames ──────────────────────────────────────────

    #[test]
    fn leading_plus_is_literal() {
        assert_eq!(ok("+file.ts"), ["+file.ts"]);
    }

    #[test]
    fn plus_after_slash_is_literal() {
        assert_eq!(ok("folder/+component.tsx"), ["folder/+component.tsx"]);
    }

    #[test]
    fn sveltekit_routes_expand_with_literal_plus() {
        assert_eq!(
            ok("routes/{+page.svelte,+layout.svelte}"),
            ["routes/+page.svelte", "routes/+layout.svelte"]
        );
    }

    // ── Whitespace normalization ──────────────────────────────────────────

    #[test]
    fn whitespace_around_slash_collapses() {
        assert_eq!(ok("folder / file.ts"), ["folder/file.ts"]);
    }

    #[test]
    fn inner_whitespace_in_segment_is_preserved() {
        assert_eq!(ok("  folder /  my file.ts  "), ["folder/my file.ts"]);
    }

    // ── Grouping ──────────────────────────────────────────────────────────

    #[test]
    fn curly_group_expands() {
        assert_eq!(ok("A{X,Y}"), ["A/X", "A/Y"]);
    }

    #[test]
    fn square_group_expands() {
        assert_eq!(ok("A[X]"), ["A/X"]);
    }

    #[test]
    fn paren_group_on_bare_name_expands() {
        assert_eq!(ok("A(X)"), ["A/X"]);
        assert_eq!(ok("pages(home.tsx)"), ["pages/home.tsx"]);
    }

    #[test]
    fn empty_group_yields_no_paths() {
        assert_eq!(ok("folder[]"), Vec::<String>::new());
        assert_eq!(ok("folder{}"), Vec::<String>::new());
    }

    #[test]
    fn empty_group_does_not_swallow_siblings() {
        assert_eq!(ok("a{} + b.ts"), ["b.ts"]);
    }

    #[test]
    fn base_trailing_slash_does_not_double() {
        assert_eq!(ok("components/{a.tsx,b.tsx}"), ["components/a.tsx", "components/b.tsx"]);
    }

    #[test]
    fn group_without_base_is_transparent() {
        assert_eq!(ok("{a.ts,b.ts}"), ["a.ts", "b.ts"]);
    }

    #[test]
    fn nested_groups_expand_depth_first() {
        assert_eq!(
            ok("src/{components/{Header.jsx,Footer.jsx},utils/helpers.js}"),
            [
                "src/components/Header.jsx",
                "src/components/Footer.jsx",
                "src/utils/helpers.js"
            ]
        );
    }

    #[test]
    fn mixed_bracket_kinds_nest() {
        assert_eq!(
            ok("api[users/{controller.ts,service.ts} + auth/middleware.ts]"),
            [
                "api/users/controller.ts",
                "api/users/service.ts",
                "api/auth/middleware.ts"
            ]
        );
    }

    #[test]
    fn separators_inside_brackets_do_not_split_top_level() {
        assert_eq!(ok("a/{x + y}"), ["a/x", "a/y"]);
    }

    #[test]
    fn top_level_separator_count_matches_expansion() {
        // Two depth-0 separators, three top-level parts.
        let paths = ok("a.ts + b/{c.ts,d.ts} + e.ts");
        assert_eq!(paths, ["a.ts", "b/c.ts", "b/d.ts", "e.ts"]);
    }

    // ── Parenthesis heuristic ─────────────────────────────────────────────

    #[test]
    fn parens_with_separators_group() {
        assert_eq!(ok("src/api(a.ts,b.ts)"), ["src/api/a.ts", "src/api/b.ts"]);
    }

    #[test]
    fn parens_on_slashed_base_without_separator_stay_literal() {
        assert_eq!(ok("src/report(final)"), ["src/report(final)"]);
    }

    #[test]
    fn nextjs_route_groups_stay_literal() {
        assert_eq!(
            ok("app/{(dashboard)/{page.tsx,layout.tsx},api/route.ts}"),
            [
                "app/(dashboard)/page.tsx",
                "app/(dashboard)/layout.tsx",
                "app/api/route.ts"
            ]
        );
    }

    #[test]
    fn bare_parenthesized_part_stays_literal() {
        assert_eq!(ok("(dashboard)"), ["(dashboard)"]);
    }

    // ── Mid-part brackets are not grouping suffixes ───────────────────────

    #[test]
    fn brackets_not_at_end_fall_through_to_literal() {
        assert_eq!(ok("ab(c)d"), ["ab(c)d"]);
        assert_eq!(ok("a{b}c"), ["a{b}c"]);
    }

    #[test]
    fn dynamic_route_segment_mid_path_is_literal() {
        assert_eq!(ok("users/[id]/route.ts"), ["users/[id]/route.ts"]);
    }

    // ── Errors ────────────────────────────────────────────────────────────

    #[test]
    fn empty_input_is_error() {
        err("");
        err("   ");
        err("\t\n");
    }

    #[test]
    fn unclosed_opener_is_error() {
        err("folder[unclosed");
        err("a/{b");
        err("x(");
    }

    #[test]
    fn unopened_closer_is_error() {
        err("folder]unopened");
        err(")x");
    }

    #[test]
    fn mismatched_bracket_kinds_are_error() {
        err("folder([)]");
        err("a{b]");
        // Mid-part brackets still participate in the kind check.
        err("a{b]c");
    }

    #[test]
    fn one_bad_part_fails_the_whole_expression() {
        err("good.ts + bad[");
    }

    #[test]
    fn error_message_is_the_exact_sentinel_text() {
        let e = parse("oops[").unwrap_err();
        assert_eq!(e.to_string(), "ERROR: Invalid expression syntax");
    }

    // ── Larger catalog-style expressions ──────────────────────────────────

    #[test]
    fn full_react_style_expression_expands() {
        let paths = ok(
            "src/{components/{Header.jsx,Footer.jsx},hooks/useAuth.js} + public/{index.html,favicon.ico}",
        );
        assert_eq!(
            paths,
            [
                "src/components/Header.jsx",
                "src/components/Footer.jsx",
                "src/hooks/useAuth.js",
                "public/index.html",
                "public/favicon.ico"
            ]
        );
    }

    #[test]
    fn trailing_slash_entries_survive_expansion() {
        assert_eq!(
            ok("tests/{fixtures/,mocks/helpers.ts}"),
            ["tests/fixtures/", "tests/mocks/helpers.ts"]
        );
    }

    #[test]
    fn deeply_nested_expression_stays_linear() {
        // Nesting depth bounded by input length; no artificial limit.
        let expr = "a{b{c{d{e{f.ts}}}}}";
        assert_eq!(ok(expr), ["a/b/c/d/e/f.ts"]);
    }
}
