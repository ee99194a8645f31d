// Code review prompt. The reply contract is the Portuguese one the model has always
// been asked for; the normalizer maps it onto the English wire keys.

/// Analysis prompt template. Replace `{language}` and `{code}` before sending.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Você é um "Code-Mentor", um especialista sênior em programação. Sua tarefa é analisar o código na linguagem {language}.

Sua resposta DEVE SER EXATAMENTE um JSON com a seguinte estrutura:
{
  "pontuacao": <um número float de 0.0 a 10.0 para a qualidade do código original>,
  "sugestoes": ["uma lista de 3 a 5 sugestões de melhoria explicando o porquê"],
  "codigo_refatorado": "<o código completo e melhorado aqui>"
}

--- CÓDIGO PARA ANÁLISE ---
```
{code}
```"#;

/// Fills the template. The code is substituted last so that placeholders inside
/// user code are left alone.
pub fn build_analysis_prompt(language: &str, code: &str) -> String {
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{language}", language)
        .replace("{code}", code)
}
