//! Global CSS styles for SolarOps.
//!
//! Light dashboard palette: white cards on a pale blue-grey page, blue
//! focus accents, red for errors.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SURFACES */
  --page-bg: #f5f6ff;
  --card-bg: #ffffff;
  --border: #d1d5db;
  --border-strong: #9ca3af;

  /* ACCENT */
  --blue: #3b82f6;
  --blue-dark: #2563eb;
  --blue-soft: rgba(59, 130, 246, 0.15);

  /* TEXT */
  --text-primary: #1f2937;
  --text-secondary: #4b5563;
  --text-muted: #9ca3af;

  /* SEMANTIC */
  --danger: #ef4444;
  --danger-soft: #fef2f2;
  --success: #15803d;
  --success-soft: #dcfce7;
  --warning: #a16207;
  --warning-soft: #fef9c3;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 200ms ease-in-out;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--page-bg);
  color: var(--text-primary);
  line-height: 1.5;
  min-height: 100vh;
}

a {
  color: inherit;
  text-decoration: none;
}

/* === Shell === */
.app-shell {
  display: flex;
  flex-direction: column;
  min-height: 100vh;
}

.page-body {
  flex: 1;
  padding: 1.5rem 2rem 3rem;
}

/* === Navigation Header === */
.nav-header {
  background: var(--card-bg);
  border-bottom: 1px solid var(--border);
}

.nav-header-inner {
  display: flex;
  align-items: center;
  gap: 2rem;
  height: 4rem;
  padding: 0 2rem;
}

.app-title {
  font-size: var(--text-xl);
  font-weight: 600;
}

.nav-links {
  display: flex;
  gap: 0.25rem;
  flex: 1;
}

.nav-link {
  padding: 0.5rem 0.75rem;
  border-radius: 0.375rem;
  color: var(--text-secondary);
  font-weight: 500;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.nav-link:hover {
  background: #f9fafb;
  color: var(--text-primary);
}

.nav-link.active {
  background: #f3f4f6;
  color: var(--text-primary);
}

.nav-logout {
  color: #dc2626;
  font-weight: 500;
}

/* === Tabs === */
.tabs {
  display: flex;
  flex-wrap: wrap;
  gap: 0.25rem;
  border-bottom: 1px solid var(--border);
  margin-bottom: 1.5rem;
}

.tab {
  padding: 0.625rem 1rem;
  color: var(--text-secondary);
  border-bottom: 2px solid transparent;
  font-weight: 500;
}

.tab.active {
  color: var(--blue-dark);
  border-bottom-color: var(--blue);
}

.notice {
  color: var(--text-secondary);
}

/* === Forms === */
.login {
  display: flex;
  justify-content: center;
  padding: 8rem 1rem 2rem;
}

.login-card {
  width: 100%;
  max-width: 28rem;
  background: var(--card-bg);
  border: 1px solid var(--border);
  border-radius: 0.5rem;
  padding: 2rem;
}

.login-card .form-grid {
  grid-template-columns: 1fr;
}

.single-form {
  max-width: 64rem;
}

.schema-form {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.form-title {
  font-size: var(--text-xl);
  font-weight: 500;
}

.form-section {
  background: var(--card-bg);
  border-radius: 0.5rem;
  padding: 1.25rem;
  box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.section-title {
  font-size: var(--text-lg);
  font-weight: 500;
  margin-bottom: 1rem;
}

.form-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr));
  column-gap: 1.25rem;
}

.form-actions {
  display: flex;
  justify-content: flex-end;
}

.form-unavailable {
  color: var(--danger);
}

/* === Repeat Groups === */
.row-group {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.row-card {
  border: 1px solid var(--border);
  border-radius: 0.5rem;
  padding: 1rem;
}

.row-card-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 1rem;
}

.row-card-title {
  font-weight: 500;
}

.row-add {
  align-self: flex-start;
}

/* === Dynamic Input === */
.dyn-field {
  position: relative;
  margin-bottom: 1rem;
}

.dyn-field.has-error {
  margin-bottom: 1.5rem;
}

.dyn-frame {
  position: relative;
  display: flex;
  align-items: center;
  border: 1px solid var(--border);
  border-radius: 0.375rem;
  background: var(--card-bg);
  transition: border-color var(--transition-normal), box-shadow var(--transition-normal);
}

.dyn-frame.neutral:hover {
  border-color: var(--border-strong);
}

.dyn-frame.focused {
  border-color: var(--blue);
  box-shadow: 0 0 0 1px var(--blue);
}

.dyn-frame.error {
  border-color: var(--danger);
}

.dyn-control {
  width: 100%;
  padding: 0.75rem 1rem;
  border: none;
  outline: none;
  background: transparent;
  font: inherit;
  color: var(--text-primary);
  border-radius: 0.375rem;
}

.dyn-control.with-icon {
  padding-left: 2.5rem;
}

.dyn-control.native-picker {
  appearance: none;
  -webkit-appearance: none;
  padding-right: 2.5rem;
  cursor: pointer;
}

.dyn-control:disabled {
  color: var(--text-muted);
  cursor: not-allowed;
}

.dyn-label {
  position: absolute;
  left: 0.75rem;
  padding: 0 0.25rem;
  pointer-events: none;
  color: var(--text-secondary);
  transition: all var(--transition-normal);
}

.dyn-label.resting {
  top: 50%;
  transform: translateY(-50%);
  font-size: var(--text-base);
}

.dyn-label.resting.with-icon {
  left: 2.25rem;
}

.dyn-label.floating {
  top: 0;
  transform: translateY(-50%);
  font-size: var(--text-xs);
  background: var(--card-bg);
}

.dyn-frame.focused .dyn-label.floating {
  color: var(--blue);
}

.dyn-label.error {
  color: var(--danger);
}

.icon {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  line-height: 1;
}

.dyn-icon {
  position: absolute;
  left: 0.75rem;
  color: var(--text-muted);
}

.dyn-chevron,
.dyn-calendar {
  position: absolute;
  right: 0.75rem;
  pointer-events: none;
  color: var(--text-muted);
}

.dyn-calendar {
  display: none;
}

.dyn-error {
  position: absolute;
  left: 0;
  top: 100%;
  display: flex;
  align-items: center;
  gap: 0.25rem;
  margin-top: 0.125rem;
  font-size: var(--text-xs);
  color: var(--danger);
}

/* === Buttons === */
.btn-primary,
.btn-secondary {
  display: inline-flex;
  align-items: center;
  gap: 0.375rem;
  padding: 0.625rem 1.5rem;
  border-radius: 0.375rem;
  font: inherit;
  font-weight: 500;
  cursor: pointer;
  transition: background var(--transition-fast), border-color var(--transition-fast);
}

.btn-primary {
  background: var(--blue);
  border: 1px solid var(--blue);
  color: #ffffff;
}

.btn-primary:hover:not(:disabled) {
  background: var(--blue-dark);
}

.btn-secondary {
  background: transparent;
  border: 1px solid var(--blue);
  color: var(--blue-dark);
}

.btn-secondary:hover:not(:disabled) {
  background: var(--blue-soft);
}

button:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.icon-btn {
  background: transparent;
  border: none;
  padding: 0.25rem;
  border-radius: 0.25rem;
  cursor: pointer;
  color: var(--text-muted);
}

.icon-btn:hover {
  color: var(--danger);
  background: var(--danger-soft);
}

/* === Meta Cards === */
.meta-list {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr));
  gap: 1.5rem;
  margin-top: 2rem;
}

.meta-card {
  background: var(--card-bg);
  border-radius: 0.375rem;
  padding: 0.75rem;
  box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.meta-card-header {
  display: flex;
  justify-content: space-between;
  align-items: flex-start;
  margin-bottom: 0.5rem;
}

.meta-card-type {
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.meta-card-description {
  margin-top: 0.5rem;
  color: var(--text-secondary);
}

.status-pill {
  padding: 0.125rem 0.625rem;
  border-radius: 9999px;
  font-size: var(--text-xs);
  background: #f3f4f6;
  color: #374151;
}

.status-pill.active {
  background: var(--success-soft);
  color: var(--success);
}

.status-pill.inactive {
  background: #fee2e2;
  color: #b91c1c;
}

.status-pill.pending {
  background: var(--warning-soft);
  color: var(--warning);
}

/* === Toast === */
.toast {
  position: fixed;
  right: 1.5rem;
  bottom: 1.5rem;
  display: flex;
  align-items: center;
  gap: 1rem;
  padding: 0.75rem 1rem;
  background: var(--success-soft);
  color: var(--success);
  border: 1px solid #86efac;
  border-radius: 0.375rem;
  box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1);
}

.toast-close {
  background: transparent;
  border: none;
  font-size: var(--text-lg);
  color: inherit;
  cursor: pointer;
}

/* === Responsive === */
@media (prefers-reduced-motion: reduce) {
  .dyn-frame,
  .dyn-label {
    transition: none;
  }
}

@media (max-width: 640px) {
  .page-body {
    padding: 1rem;
  }

  .nav-header-inner {
    gap: 1rem;
    padding: 0 1rem;
  }

  .form-grid {
    grid-template-columns: 1fr;
  }

  .dyn-calendar {
    display: inline-flex;
  }
}
"#;
