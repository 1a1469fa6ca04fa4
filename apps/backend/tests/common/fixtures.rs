//! Sample lecture files.

pub const LECTURE_01: &str = r"\part{Foundations}
\section{What is overfitting?}
The model fits \textbf{noise} in the training data.

\section{State the bias-variance decomposition}
\[
  E[(y - \hat f)^2] = \mathrm{Bias}^2 + \mathrm{Var} + \sigma^2
\]
";

pub const LECTURE_02: &str = r"\section{List two regularisers}
\begin{itemize}
\item L1
\item L2
\end{itemize}
\part{Appendix}
Not part of any answer.
";

/// Generate a lecture with `num_sections` numbered questions.
pub fn sample_lecture(num_sections: usize) -> String {
    (0..num_sections)
        .map(|i| format!("\\section{{Question {}}}\nAnswer {}.\n", i + 1, i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}
