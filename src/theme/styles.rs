//! Global CSS styles for Mundos.
//!
//! Light by default; `.app-root.dark` switches the palette. World colors are
//! applied inline from the active world theme.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
.app-root {
  --bg: #f8fafc;
  --surface: #ffffff;
  --border: #e2e8f0;
  --text-primary: #0f172a;
  --text-secondary: #475569;
  --accent: #4f46e5;
  --danger: #e11d48;

  --font-sans: 'Inter', system-ui, sans-serif;
  --radius: 12px;
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;

  min-height: 100vh;
  background: var(--bg);
  color: var(--text-primary);
  font-family: var(--font-sans);
  transition: background var(--transition-normal), color var(--transition-normal);
}

.app-root.dark {
  --bg: #0b1020;
  --surface: #131a2e;
  --border: #1f2a44;
  --text-primary: #f1f5f9;
  --text-secondary: #94a3b8;
  --accent: #22d3ee;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  -webkit-font-smoothing: antialiased;
  line-height: 1.6;
}

a {
  color: inherit;
  text-decoration: none;
}

/* === Typography === */
.page-title {
  font-size: 2rem;
  font-weight: 700;
  margin-bottom: 0.5rem;
}

.section-header {
  font-size: 1.25rem;
  font-weight: 600;
  margin: 1.5rem 0 0.75rem;
}

.tagline,
.body-text {
  color: var(--text-secondary);
}

.muted {
  opacity: 0.7;
}

/* === Navigation === */
.nav-header {
  position: sticky;
  top: 0;
  z-index: 10;
  background: var(--surface);
  border-bottom: 1px solid var(--border);
  transition: background var(--transition-normal);
}

.nav-header.world {
  border-bottom: none;
  color: #ffffff;
}

.nav-header-inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1.5rem;
  max-width: 1100px;
  margin: 0 auto;
  padding: 0.75rem 1.5rem;
}

.nav-title {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.app-title {
  font-size: 1.25rem;
  font-weight: 700;
}

.nav-links,
.nav-actions {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.nav-link {
  padding: 0.25rem 0.5rem;
  border-radius: 6px;
  opacity: 0.8;
  transition: opacity var(--transition-fast);
}

.nav-link:hover,
.nav-link.active {
  opacity: 1;
  font-weight: 600;
}

.theme-toggle {
  display: inline-flex;
  padding: 0.4rem;
  border: 1px solid var(--border);
  border-radius: 50%;
  background: transparent;
  color: inherit;
  cursor: pointer;
}

/* === Widgets === */
.xp-badge {
  display: inline-flex;
  align-items: center;
  gap: 0.35rem;
  padding: 0.2rem 0.65rem;
  border: 1px solid;
  border-radius: 999px;
  font-size: 0.875rem;
  font-weight: 600;
}

.gem-icon {
  display: inline-block;
  flex-shrink: 0;
}

.gem-icon--animated {
  animation: gem-shimmer 2.4s ease-in-out infinite;
}

@keyframes gem-shimmer {
  0%, 100% { transform: translateY(0) rotate(0deg); filter: brightness(1); }
  50% { transform: translateY(-3px) rotate(-4deg); filter: brightness(1.3); }
}

/* === Buttons === */
.btn-primary,
.btn-ghost,
.btn-world,
.btn-enter {
  display: inline-block;
  padding: 0.6rem 1.2rem;
  border-radius: var(--radius);
  font-weight: 600;
  cursor: pointer;
  transition: transform var(--transition-fast), opacity var(--transition-fast);
}

.btn-primary,
.btn-enter {
  background: var(--accent);
  color: #ffffff;
  border: none;
}

.btn-enter {
  margin-top: 1.5rem;
  padding: 0.9rem 2rem;
  font-size: 1.1rem;
}

.btn-ghost {
  background: transparent;
  color: var(--text-primary);
  border: 1px solid var(--border);
}

.btn-world {
  color: #ffffff;
  border: none;
}

.btn-primary:hover,
.btn-world:hover,
.btn-enter:hover {
  transform: translateY(-1px);
}

button:disabled {
  opacity: 0.5;
  cursor: default;
  transform: none;
}

/* === Layout === */
.page {
  max-width: 1100px;
  margin: 0 auto;
  padding: 2rem 1.5rem;
}

.landing-header {
  display: flex;
  flex-direction: column;
  align-items: center;
  text-align: center;
  padding: 3rem 0;
}

.feature-grid,
.world-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
  gap: 1rem;
  margin-bottom: 1.5rem;
}

.feature-card,
.world-card {
  display: block;
  padding: 1.25rem;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
}

.world-card--portal {
  color: #ffffff;
  border: none;
}

.world-card--portal .body-text {
  color: rgba(255, 255, 255, 0.8);
}

.world-card-title {
  font-size: 1.1rem;
  margin: 0.5rem 0 0.25rem;
}

.world-card-meta {
  margin-top: 0.5rem;
  font-size: 0.85rem;
  opacity: 0.8;
}

.dashboard-header,
.perfil-stats {
  display: flex;
  align-items: center;
  gap: 1rem;
  flex-wrap: wrap;
  margin-bottom: 1rem;
}

/* === Exercises === */
.exercise-list {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  margin-top: 1.5rem;
}

.exercise-item {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  padding: 1rem 1.25rem;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
}

.exercise-meta {
  display: flex;
  gap: 1rem;
  font-size: 0.875rem;
  color: var(--text-secondary);
}

/* === Forms === */
.login-form {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  max-width: 360px;
  margin-top: 1rem;
}

.text-input {
  padding: 0.6rem 0.8rem;
  border: 1px solid var(--border);
  border-radius: 8px;
  background: var(--surface);
  color: var(--text-primary);
}

.error-message {
  color: var(--danger);
  font-size: 0.875rem;
}

.loading-state,
.not-found {
  padding: 3rem 0;
  text-align: center;
}
"#;
