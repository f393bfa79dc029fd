//! Prompts for the model-backed comparison pass.

/// System prompt instructing the model to return structured discrepancies.
///
/// The schema deliberately asks for literal `report1Text`/`report2Text`
/// excerpts alongside numeric locations: excerpts can be re-searched in the
/// exact source text, which is the verification path `locate` prefers.
pub const COMPARISON_SYSTEM_PROMPT: &str = r#"You are a medical report analyzer. Compare these reports and identify discrepancies. Focus on:
1. Different values for the same measurements (e.g., glucose levels, cholesterol, etc.)
2. Different interpretations of the same values (e.g., one report says "high" while another says "normal")
3. Different follow-up recommendations
4. Missing values present in one report but not the other

For each discrepancy found, create a JSON object with:
- A unique string ID
- The type of discrepancy ("conflict" for different values/interpretations, "missing" for missing values)
- A clear description of the difference
- The severity ("critical" for clinically significant differences, "high" for important differences, "medium" for moderate differences)
- The exact location in each report (character start/end positions, 0-based, inclusive start, exclusive end, matching the exact text provided above)
- The exact phrase(s) from each report that you are referencing as "report1Text" and "report2Text" (if not present, set to null)
- Clinical context explaining the significance
- A suggestion for resolving the discrepancy

IMPORTANT: Use the exact text provided above for calculating character positions. If you cannot find the exact phrase, set the location to null.

Return ONLY a JSON object with this exact structure:
{
  "discrepancies": [
    {
      "id": string,
      "type": "conflict" | "missing",
      "description": string,
      "severity": "critical" | "high" | "medium" | "low",
      "location": {
        "report1Location": { "start": number, "end": number } | null,
        "report2Location": { "start": number, "end": number } | null
      },
      "report1Text": string | null,
      "report2Text": string | null,
      "context": string,
      "suggestion": string
    }
  ]
}"#;

/// Build the user message carrying both report bodies.
pub fn build_comparison_prompt(content1: &str, content2: &str) -> String {
    format!(
        "Compare these medical reports and identify all discrepancies:\n\n\
         First Report:\n{content1}\n\n\
         Second Report:\n{content2}"
    )
}
