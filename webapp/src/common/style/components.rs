pub const BASE_COMPONENTS: &str = r#"
/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-1) var(--space-3);
  border-radius: var(--radius-sm);
  font: inherit;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard);
}

.btn-default {
  background-color: var(--primary);
  border: 1px solid var(--primary);
  color: white;
}

.btn-default:hover {
  background-color: var(--primary-dark);
}

.btn-outline {
  background-color: transparent;
  border: 1px solid var(--gray-500);
  color: inherit;
}

.btn-outline:hover {
  background-color: var(--gray-600);
}
"#;
