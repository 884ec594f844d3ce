pub const SITE_STYLES: &str = r#"
.site-root {
  position: relative;
  min-height: 100vh;
  padding: var(--space-4);
  overflow: hidden;
  color: var(--text-primary);
  background-color: var(--background);
  transition: background-color var(--transition-theme) var(--easing-standard),
              color var(--transition-theme) var(--easing-standard);
}

/* Header */
.site-header {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: space-between;
  gap: var(--space-4);
  margin-bottom: var(--space-6);
}

@media (min-width: 640px) {
  .site-header {
    flex-direction: row;
  }
}

.site-logo {
  height: 48px;
  width: auto;
}

.header-controls {
  display: flex;
  gap: var(--space-2);
}

/* Navigation */
.section-nav {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: var(--space-2);
  margin-bottom: var(--space-6);
}

/* Content */
.section-fragment {
  padding: var(--space-4);
  animation: section-enter 250ms var(--easing-standard);
}

@keyframes section-enter {
  from {
    opacity: 0;
    transform: translateY(20px);
  }
  to {
    opacity: 1;
    transform: translateY(0);
  }
}

.section-title {
  font-size: 1.5rem;
  font-weight: 700;
  margin-bottom: var(--space-2);
}

.section-title-lg {
  font-size: 1.875rem;
}

.lead {
  font-size: 1.125rem;
}

.link-list {
  list-style: disc inside;
  margin-bottom: var(--space-4);
}

.link-list a {
  color: var(--link);
}

.icon-links {
  display: flex;
  gap: var(--space-4);
}

.icon-link {
  color: inherit;
  transition: transform var(--transition-fast) var(--easing-standard);
}

.icon-link:hover {
  transform: scale(1.2);
}

/* Footer */
.site-footer {
  margin-top: var(--space-10);
  text-align: center;
  font-size: 0.875rem;
  opacity: 0.7;
}

/* Starfield, shown while the music plays */
.stars-bg::before {
  content: "";
  position: absolute;
  inset: 0;
  z-index: 0;
  pointer-events: none;
  background-image:
    radial-gradient(1px 1px at 20px 30px, #fff, transparent),
    radial-gradient(1px 1px at 40px 70px, #ddd, transparent),
    radial-gradient(1px 1px at 90px 40px, #fff, transparent),
    radial-gradient(2px 2px at 160px 120px, #eee, transparent),
    radial-gradient(1px 1px at 130px 80px, #fff, transparent);
  background-repeat: repeat;
  background-size: 200px 200px;
  animation: stars-drift 60s linear infinite;
  opacity: 0.6;
}

.stars-bg > * {
  position: relative;
  z-index: 1;
}

@keyframes stars-drift {
  from {
    background-position: 0 0;
  }
  to {
    background-position: 0 -2000px;
  }
}
"#;
