pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --primary: #2563EB;          /* filled buttons */
  --primary-dark: #1D4ED8;
  --link: #3B82F6;

  /* Neutrals */
  --gray-100: #F3F4F6;
  --gray-500: #6B7280;
  --gray-600: #4B5563;
  --gray-900: #111827;
  --black: #000000;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-10: 40px;

  /* Border Radius */
  --radius-sm: 4px;

  /* Animation */
  --transition-fast: 150ms;
  --transition-theme: 300ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}

/* Themes: both keep light text, only the backdrop changes */
.theme-dark {
  --background: var(--black);
  --text-primary: var(--gray-100);
}

.theme-light {
  --background: var(--gray-900);
  --text-primary: var(--gray-100);
}
"#;
