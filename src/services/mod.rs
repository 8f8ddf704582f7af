pub(crate) mod gemini;
