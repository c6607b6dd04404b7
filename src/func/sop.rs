//! Text representation of a sum of products

use std::fmt;

use crate::func::term::{Bit, Term};
use crate::func::variables::{VariableNamer, INDEXED};

/// Supported notations for sums of products
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SopStyle {
    /// "x3!x1x0 + !x2x1"
    Plain,
    /// "x_{3}\overline{x_{1}}x_{0}+\overline{x_{2}}x_{1}"
    Latex,
}

/// Display a list of terms as a disjunction of conjunctions.
///
/// Literals of a term are written from the highest variable down to variable 0,
/// absent variables are omitted.
pub struct SumOfProducts<'a> {
    pub terms: &'a [Term],
    pub namer: &'a dyn VariableNamer,
    pub style: SopStyle,
}

impl<'a> SumOfProducts<'a> {
    pub fn new(terms: &'a [Term]) -> Self {
        SumOfProducts {
            terms,
            namer: &INDEXED,
            style: SopStyle::Plain,
        }
    }

    pub fn named(mut self, namer: &'a dyn VariableNamer) -> Self {
        self.namer = namer;
        self
    }

    pub fn style(mut self, style: SopStyle) -> Self {
        self.style = style;
        self
    }

    fn fmt_term(&self, f: &mut fmt::Formatter, term: &Term) -> fmt::Result {
        for idx in (0..term.len()).rev() {
            match (term.bit(idx), self.style) {
                (Bit::DontCare, _) => (),
                (Bit::One, SopStyle::Plain) => self.namer.format_name(f, idx)?,
                (Bit::Zero, SopStyle::Plain) => {
                    write!(f, "!")?;
                    self.namer.format_name(f, idx)?;
                }
                (Bit::One, SopStyle::Latex) => self.fmt_latex_name(f, idx)?,
                (Bit::Zero, SopStyle::Latex) => {
                    write!(f, "\\overline{{")?;
                    self.fmt_latex_name(f, idx)?;
                    write!(f, "}}")?;
                }
            }
        }
        Ok(())
    }

    /// Render each term separately, in the selected style
    pub fn term_strings(&self) -> Vec<String> {
        self.terms
            .iter()
            .map(|t| {
                SumOfProducts::new(std::slice::from_ref(t))
                    .named(self.namer)
                    .style(self.style)
                    .to_string()
            })
            .collect()
    }

    /// Names of the first variables, in the selected style
    pub fn variable_names(&self, count: usize) -> Vec<String> {
        (0..count)
            .map(|idx| match self.style {
                SopStyle::Plain => self.namer.name(idx),
                SopStyle::Latex => self.latex_name(idx),
            })
            .collect()
    }

    fn latex_name(&self, idx: usize) -> String {
        let name = self.namer.name(idx);
        // Subscript the index of generated names
        if name == INDEXED.name(idx) {
            format!("x_{{{}}}", idx)
        } else {
            name
        }
    }

    fn fmt_latex_name(&self, f: &mut fmt::Formatter, idx: usize) -> fmt::Result {
        write!(f, "{}", self.latex_name(idx))
    }
}

impl fmt::Display for SumOfProducts<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sep = match self.style {
            SopStyle::Plain => " + ",
            SopStyle::Latex => "+",
        };
        for (i, t) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", sep)?;
            }
            self.fmt_term(f, t)?;
        }
        Ok(())
    }
}

/// Format a list of terms as a sum of products using the default variable names
pub fn format_sum_of_products(terms: &[Term]) -> String {
    SumOfProducts::new(terms).to_string()
}

/// Number of terms on each row of LaTeX documents
pub const TERMS_PER_ROW: usize = 5;

/// Wrap a list of rendered terms in a standalone LaTeX document.
///
/// The formula `f(variables) = ...` is laid out in an array. The name of the function
/// takes the first row, then each row holds up to [TERMS_PER_ROW] terms. The `+` at a
/// row break is repeated at the start of the next row.
pub fn latex_document(variables: &[String], terms: &[String]) -> String {
    let mut rows = vec![format!("f({}) =", variables.join(", "))];
    for (i, chunk) in terms.chunks(TERMS_PER_ROW).enumerate() {
        let mut row = String::new();
        if i > 0 {
            row.push('+');
        }
        row.push_str(&chunk.join("+"));
        if (i + 1) * TERMS_PER_ROW < terms.len() {
            row.push('+');
        }
        rows.push(row);
    }

    let mut doc = String::new();
    doc.push_str("\\documentclass{article}\n");
    doc.push_str("\\usepackage{amsmath}\n");
    doc.push_str("\\usepackage[utf8]{inputenc}\n");
    doc.push_str("\\begin{document}\n");
    doc.push_str("\\begin{equation*}\n");
    doc.push_str("\\begin{array}{cc}\n");
    doc.push_str(&rows.join("\n\\\\\n"));
    doc.push('\n');
    doc.push_str("\\end{array}\n");
    doc.push_str("\\end{equation*}\n");
    doc.push_str("\\end{document}\n");
    doc
}
